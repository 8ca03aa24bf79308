//! Navigation targets, written the same way as the web paths:
//! `/`, `/login` and `/puzzle/<category>?age=<low-high>`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::models::{AgeRange, Category};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    /// Category and age are kept raw; an invalid value lands on the
    /// "no puzzles" screen rather than failing the parse.
    Puzzle {
        category: String,
        age: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown route `{0}`")]
pub struct RouteError(pub String);

impl Route {
    pub fn puzzle(category: Category, age: AgeRange) -> Self {
        Self::Puzzle {
            category: category.id().to_string(),
            age: Some(age.to_string()),
        }
    }

    /// Whether the route needs a logged-in user.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Login)
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, query) = match s.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (s, None),
        };
        let segments: Vec<&str> = path.split('/').filter(|seg| !seg.is_empty()).collect();

        match segments.as_slice() {
            [] => Ok(Self::Home),
            ["login"] => Ok(Self::Login),
            ["puzzle", category] => {
                let age = query.and_then(|query| {
                    query.split('&').find_map(|pair| match pair.split_once('=') {
                        Some(("age", value)) => Some(value.to_string()),
                        _ => None,
                    })
                });
                Ok(Self::Puzzle {
                    category: category.to_string(),
                    age,
                })
            }
            _ => Err(RouteError(s.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::Login => f.write_str("/login"),
            Self::Puzzle {
                category,
                age: Some(age),
            } => write!(f, "/puzzle/{category}?age={age}"),
            Self::Puzzle { category, age: None } => write!(f, "/puzzle/{category}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_routes() {
        assert_eq!("/".parse(), Ok(Route::Home));
        assert_eq!("".parse(), Ok(Route::Home));
        assert_eq!("/login".parse(), Ok(Route::Login));
    }

    #[test]
    fn parses_puzzle_route_with_age_query() {
        assert_eq!(
            "/puzzle/patterns?age=3-4".parse(),
            Ok(Route::puzzle(Category::Patterns, AgeRange::ThreeToFour))
        );
        assert_eq!(
            "/puzzle/logical?lang=en&age=5-6".parse::<Route>().unwrap(),
            Route::Puzzle {
                category: "logical".into(),
                age: Some("5-6".into())
            }
        );
    }

    #[test]
    fn age_is_optional() {
        assert_eq!(
            "/puzzle/shapes_match".parse(),
            Ok(Route::Puzzle {
                category: "shapes_match".into(),
                age: None
            })
        );
    }

    #[test]
    fn unknown_paths_fail() {
        assert!("/settings".parse::<Route>().is_err());
        assert!("/puzzle".parse::<Route>().is_err());
        assert!("/puzzle/patterns/extra".parse::<Route>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        let route = Route::puzzle(Category::ShapesMatch, AgeRange::FourToFive);
        assert_eq!(route.to_string(), "/puzzle/shapes_match?age=4-5");
        assert_eq!(route.to_string().parse(), Ok(route));
    }

    #[test]
    fn only_login_is_public() {
        assert!(!Route::Login.is_protected());
        assert!(Route::Home.is_protected());
    }
}
