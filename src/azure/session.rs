//! Session guard: make sure `az` exists and is logged in.

use super::cli::AzCli;
use crate::error::{ClickOpsError, Result};
use colored::Colorize;

/// Fail if the Azure CLI binary cannot be run.
pub fn verify_tool_present(az: &AzCli) -> Result<()> {
    let version = az.run("--version")?;
    log::info!(
        "az cli found: {}",
        version.lines().next().unwrap_or_default().trim()
    );
    Ok(())
}

/// Check the current az session and run `az login` once if there is none.
pub fn ensure_authenticated(az: &AzCli) -> Result<()> {
    match az.run("account show -o json") {
        Ok(_) => {
            log::info!("az cli session is authenticated");
            Ok(())
        }
        Err(e @ ClickOpsError::CommandFailed { .. }) => {
            log::warn!("az account show failed: {e}");
            println!(
                "{}",
                "🔑 Azure CLI is not logged in. Attempting to log in...".yellow()
            );
            az.run_interactive("login").map_err(|e| ClickOpsError::LoginFailed {
                source: Box::new(e),
            })?;
            println!("{}", "✅ Azure CLI login successful.".green());
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_tool_missing() {
        let az = AzCli::new("clickops-no-such-az-91c3");
        assert!(matches!(
            verify_tool_present(&az),
            Err(ClickOpsError::ToolNotFound { .. })
        ));
    }

    #[test]
    fn test_ensure_authenticated_tool_missing_is_not_login_failure() {
        let az = AzCli::new("clickops-no-such-az-91c3");
        assert!(matches!(
            ensure_authenticated(&az),
            Err(ClickOpsError::ToolNotFound { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_authenticated_ok() {
        // `true` ignores its arguments and exits 0
        let az = AzCli::new("true");
        ensure_authenticated(&az).expect("session should be accepted");
    }

    #[cfg(unix)]
    #[test]
    fn test_login_failure() {
        // `false` fails both `account show` and `login`
        let az = AzCli::new("false");
        assert!(matches!(
            ensure_authenticated(&az),
            Err(ClickOpsError::LoginFailed { .. })
        ));
    }
}
