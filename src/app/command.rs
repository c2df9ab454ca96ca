use crate::core::ordering::SortOrder;
use crate::domain::model::Movie;
use crate::utils::error::{CatalogError, Result};
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  list | display | refresh          show every movie
  add <id> <title> <year> <rating>  add a movie (quote titles with spaces)
  search <id or title>              find movies by id or title
  sort az | za | best               reorder the list
  delete <id or title>              remove every matching movie
  help                              show this text
  quit | exit                       leave";

/// One line of shell input, already coerced into typed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add(Movie),
    Search(String),
    Sort(SortOrder),
    Delete(String),
    Help,
    Quit,
}

impl Command {
    /// Parses a line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let words = shell_words::split(line)
            .map_err(|e| CatalogError::invalid_command(format!("Could not read input: {}", e)))?;
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };

        let command = match name.to_lowercase().as_str() {
            "list" | "display" | "refresh" => Command::List,
            "add" => Command::Add(parse_movie(args)?),
            "search" => Command::Search(join_query(args)),
            "sort" => Command::Sort(parse_sort_order(args)?),
            "delete" => {
                let query = join_query(args);
                if query.is_empty() {
                    return Err(CatalogError::invalid_command("Please enter a movie ID or title"));
                }
                Command::Delete(query)
            }
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(CatalogError::invalid_command(format!(
                    "Unknown command '{}'",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

/// `add` takes id, title, year and rating. Unquoted multi-word titles are
/// accepted: everything between the id and the last two fields is the title.
fn parse_movie(args: &[String]) -> Result<Movie> {
    if args.len() < 4 {
        return Err(CatalogError::invalid_command("Please fill in all fields."));
    }

    let id = parse_number::<i64>("id", &args[0])?;
    let title = args[1..args.len() - 2].join(" ");
    let year = parse_number::<i32>("year", &args[args.len() - 2])?;
    let rating = parse_number::<u8>("rating", &args[args.len() - 1])?;

    Movie::new(id, title, year, rating)
}

fn join_query(args: &[String]) -> String {
    args.join(" ").trim().to_string()
}

fn parse_number<T: FromStr>(field: &str, raw: &str) -> Result<T> {
    raw.parse::<T>()
        .map_err(|_| CatalogError::invalid_record(field, raw, "must be a whole number"))
}

fn parse_sort_order(args: &[String]) -> Result<SortOrder> {
    match args.first().map(|a| a.to_lowercase()).as_deref() {
        Some("az") => Ok(SortOrder::TitleAscending),
        Some("za") => Ok(SortOrder::TitleDescending),
        Some("best") => Ok(SortOrder::RatingDescending),
        _ => Err(CatalogError::invalid_command("Sort by one of: az, za, best")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# seeded list").unwrap(), None);
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("list"), Command::List);
        assert_eq!(parse("REFRESH"), Command::List);
        assert_eq!(parse("help"), Command::Help);
        assert_eq!(parse("exit"), Command::Quit);
    }

    #[test]
    fn test_add_with_quoted_title() {
        let expected = Movie::new(20, "The Big Lebowski", 1998, 5).unwrap();
        assert_eq!(parse("add 20 \"The Big Lebowski\" 1998 5"), Command::Add(expected));
    }

    #[test]
    fn test_add_with_unquoted_title() {
        let expected = Movie::new(21, "Stand by Me", 1986, 5).unwrap();
        assert_eq!(parse("add 21 Stand by Me 1986 5"), Command::Add(expected));
    }

    #[test]
    fn test_add_rejects_missing_fields() {
        let err = Command::parse("add 20 Heat 1995").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCommand { .. }));
    }

    #[test]
    fn test_add_rejects_non_numeric_fields() {
        for line in ["add x Heat 1995 4", "add 1 Heat nineteen 4", "add 1 Heat 1995 -1"] {
            let err = Command::parse(line).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidRecord { .. }), "{}", line);
        }
    }

    #[test]
    fn test_add_rejects_rating_out_of_range() {
        let err = Command::parse("add 1 Heat 1995 9").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecord { ref field, .. } if field == "rating"));
    }

    #[test]
    fn test_search_joins_words() {
        assert_eq!(parse("search the   mask"), Command::Search("the mask".to_string()));
        assert_eq!(parse("search"), Command::Search(String::new()));
    }

    #[test]
    fn test_sort_orders() {
        assert_eq!(parse("sort az"), Command::Sort(SortOrder::TitleAscending));
        assert_eq!(parse("sort ZA"), Command::Sort(SortOrder::TitleDescending));
        assert_eq!(parse("sort best"), Command::Sort(SortOrder::RatingDescending));
        assert!(Command::parse("sort sideways").is_err());
        assert!(Command::parse("sort").is_err());
    }

    #[test]
    fn test_delete_requires_query() {
        assert_eq!(parse("delete 7"), Command::Delete("7".to_string()));
        assert!(Command::parse("delete").is_err());
        assert!(Command::parse("delete \"  \"").is_err());
    }

    #[test]
    fn test_unknown_command_and_bad_quoting() {
        assert!(Command::parse("rename 1 Foo").is_err());
        assert!(Command::parse("search \"unclosed").is_err());
    }
}
