//! Subscription selection.
//!
//! [`parse_selection`] validates one line of operator input;
//! [`select_subscriptions`] drives the prompt loop over any reader/writer.

use crate::error::{ClickOpsError, Result};
use crate::models::Subscription;
use std::fmt;
use std::io::{BufRead, Write};

/// A valid menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based index into the subscription list.
    One(usize),
    All,
}

/// Input that is not a menu entry; the prompt should be repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice(pub String);

impl fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid choice '{}'", self.0)
    }
}

/// Menu entries are `1..=count` for single subscriptions and `count + 1` for all.
pub fn parse_selection(line: &str, count: usize) -> std::result::Result<Selection, InvalidChoice> {
    let trimmed = line.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if n >= 1 && n <= count => Ok(Selection::One(n - 1)),
        Ok(n) if n == count + 1 => Ok(Selection::All),
        _ => Err(InvalidChoice(trimmed.to_string())),
    }
}

pub fn format_menu(subscriptions: &[Subscription]) -> String {
    let mut menu = String::from("\n📋 Available Subscriptions:\n");
    for (i, sub) in subscriptions.iter().enumerate() {
        menu.push_str(&format!("  {}: {}\n", i + 1, sub.name));
    }
    menu.push_str(&format!(
        "  {}: Evaluate all subscriptions\n",
        subscriptions.len() + 1
    ));
    menu
}

/// Prompt until a valid choice is read and return the chosen subscriptions.
///
/// Invalid input re-prompts without limit; end of input aborts. With no
/// subscriptions the menu only offers "all", which selects nothing.
pub fn select_subscriptions<'a, R: BufRead, W: Write>(
    subscriptions: &'a [Subscription],
    mut input: R,
    mut output: W,
) -> Result<Vec<&'a Subscription>> {
    write!(output, "{}", format_menu(subscriptions))?;

    let mut line = String::new();
    loop {
        write!(output, "\n📎 Select a subscription (enter the number): ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::warn!("input closed before a subscription was selected");
            return Err(ClickOpsError::SelectionAborted);
        }

        match parse_selection(&line, subscriptions.len()) {
            Ok(Selection::One(i)) => {
                log::info!("Selected subscription {}", subscriptions[i].name);
                return Ok(vec![&subscriptions[i]]);
            }
            Ok(Selection::All) => {
                log::info!("Selected all {} subscriptions", subscriptions.len());
                return Ok(subscriptions.iter().collect());
            }
            Err(e) => {
                log::debug!("{e}");
                writeln!(output, "❌ Invalid choice. Please try again.")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn subs() -> Vec<Subscription> {
        vec![
            Subscription::new("id-1", "prod"),
            Subscription::new("id-2", "dev"),
        ]
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1", 2), Ok(Selection::One(0)));
        assert_eq!(parse_selection(" 2 \n", 2), Ok(Selection::One(1)));
        assert_eq!(parse_selection("3", 2), Ok(Selection::All));
        assert!(parse_selection("0", 2).is_err());
        assert!(parse_selection("4", 2).is_err());
        assert!(parse_selection("-1", 2).is_err());
        assert!(parse_selection("two", 2).is_err());
        assert!(parse_selection("", 2).is_err());
    }

    #[test]
    fn test_format_menu() {
        let menu = format_menu(&subs());
        assert!(menu.contains("  1: prod\n"));
        assert!(menu.contains("  2: dev\n"));
        assert!(menu.contains("  3: Evaluate all subscriptions\n"));
    }

    #[test]
    fn test_select_retries_until_valid() {
        let subs = subs();
        let mut out = Vec::new();
        let chosen = select_subscriptions(&subs, Cursor::new("abc\n9\n2\n"), &mut out)
            .expect("third line is valid");
        assert_eq!(chosen, vec![&subs[1]]);

        let out = String::from_utf8(out).expect("utf8 output");
        assert_eq!(out.matches("Invalid choice").count(), 2);
        assert_eq!(out.matches("Select a subscription").count(), 3);
    }

    #[test]
    fn test_select_all() {
        let subs = subs();
        let chosen = select_subscriptions(&subs, Cursor::new("3\n"), Vec::new())
            .expect("all is valid");
        assert_eq!(chosen.len(), 2);
        assert_eq!(chosen[0].id, "id-1");
        assert_eq!(chosen[1].id, "id-2");
    }

    #[test]
    fn test_select_eof_aborts() {
        let subs = subs();
        let err = select_subscriptions(&subs, Cursor::new("x\n"), Vec::new())
            .expect_err("input ends without a valid choice");
        assert!(matches!(err, ClickOpsError::SelectionAborted));
    }

    #[test]
    fn test_select_empty_list_offers_only_all() {
        let mut out = Vec::new();
        let chosen = select_subscriptions(&[], Cursor::new("1\n"), &mut out)
            .expect("entry 1 is 'all' when nothing is listed");
        assert!(chosen.is_empty());

        let out = String::from_utf8(out).expect("utf8 output");
        assert!(out.contains("  1: Evaluate all subscriptions"));
    }

    #[test]
    fn test_parse_selection_empty_list() {
        assert_eq!(parse_selection("1", 0), Ok(Selection::All));
        assert!(parse_selection("2", 0).is_err());
    }
}
