//! Search command implementation.
//!
//! The query engine takes explicit named filters; the positional
//! digit/hyphen classification lives only here, in the dispatcher,
//! for compatibility with `evlog search 2023-05 Birthday` style calls.

use crate::cli::SearchArgs;
use crate::error::{Error, Result};
use crate::model::SearchHit;
use crate::validate::looks_like_date;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct SearchOutput {
    events: Vec<SearchHit>,
    count: usize,
}

/// Execute the search command.
///
/// # Errors
///
/// Returns an error if the argument shape is invalid or the query fails.
pub fn execute(args: &SearchArgs, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let (keyword, date) = resolve_filters(args)?;

    let storage = super::open_storage(db_path)?;
    let hits = storage.search(keyword.as_deref(), date.as_deref())?;

    if json {
        let output = SearchOutput {
            count: hits.len(),
            events: hits,
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("Nothing found.");
        return Ok(());
    }

    println!("Events ({} found):", hits.len());
    println!();
    for hit in &hits {
        println!("{}  {}", hit.date, hit.name.bold());
        println!("  Participants: {}", hit.participants_display());
    }
    Ok(())
}

/// Resolve (keyword, date) filters from flags and positional terms.
///
/// Positional terms are classified by shape: the first term made of
/// digits and hyphens only is the date filter, anything else the
/// keyword; a second term fills the remaining slot. Explicit `--date`
/// and `--keyword` flags claim their slot up front.
fn resolve_filters(args: &SearchArgs) -> Result<(Option<String>, Option<String>)> {
    let mut keyword = args.keyword.clone();
    let mut date = args.date.clone();

    if args.terms.len() > 2 {
        return Err(Error::InvalidArgument(format!(
            "expected at most 2 search terms, got {}",
            args.terms.len()
        )));
    }

    for term in &args.terms {
        let slot = if looks_like_date(term) && date.is_none() {
            &mut date
        } else if keyword.is_none() {
            &mut keyword
        } else if date.is_none() {
            &mut date
        } else {
            return Err(Error::InvalidArgument(
                "both keyword and date filters are already set".to_string(),
            ));
        };
        *slot = Some(term.clone());
    }

    Ok((keyword, date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(terms: &[&str], keyword: Option<&str>, date: Option<&str>) -> SearchArgs {
        SearchArgs {
            terms: terms.iter().map(ToString::to_string).collect(),
            keyword: keyword.map(ToString::to_string),
            date: date.map(ToString::to_string),
        }
    }

    #[test]
    fn test_no_terms_no_filters() {
        let (keyword, date) = resolve_filters(&args(&[], None, None)).unwrap();
        assert!(keyword.is_none());
        assert!(date.is_none());
    }

    #[test]
    fn test_single_term_classified_by_shape() {
        let (keyword, date) = resolve_filters(&args(&["2023-05"], None, None)).unwrap();
        assert!(keyword.is_none());
        assert_eq!(date.as_deref(), Some("2023-05"));

        let (keyword, date) = resolve_filters(&args(&["Birthday"], None, None)).unwrap();
        assert_eq!(keyword.as_deref(), Some("Birthday"));
        assert!(date.is_none());
    }

    #[test]
    fn test_two_terms_fill_both_slots_either_order() {
        let (keyword, date) =
            resolve_filters(&args(&["2023-05", "Birthday"], None, None)).unwrap();
        assert_eq!(keyword.as_deref(), Some("Birthday"));
        assert_eq!(date.as_deref(), Some("2023-05"));

        let (keyword, date) =
            resolve_filters(&args(&["Birthday", "2023-05"], None, None)).unwrap();
        assert_eq!(keyword.as_deref(), Some("Birthday"));
        assert_eq!(date.as_deref(), Some("2023-05"));
    }

    #[test]
    fn test_explicit_flags_claim_slots() {
        let (keyword, date) =
            resolve_filters(&args(&["Birthday"], None, Some("2023"))).unwrap();
        assert_eq!(keyword.as_deref(), Some("Birthday"));
        assert_eq!(date.as_deref(), Some("2023"));

        // Flag took the date slot; a date-shaped term falls to keyword
        let (keyword, date) =
            resolve_filters(&args(&["2024"], None, Some("2023"))).unwrap();
        assert_eq!(keyword.as_deref(), Some("2024"));
        assert_eq!(date.as_deref(), Some("2023"));
    }

    #[test]
    fn test_overflowing_terms_rejected() {
        assert!(resolve_filters(&args(&["a", "b", "c"], None, None)).is_err());
        assert!(
            resolve_filters(&args(&["a", "2023"], Some("kw"), Some("2022"))).is_err()
        );
    }
}
