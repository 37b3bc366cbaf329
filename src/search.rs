use crate::error::ApiError;
use crate::models::{Player, ROLE_KEYWORDS, VALID_ROLES};

/// Raw query parameters for `GET /api/searchPlayers`.
#[derive(Debug, Default)]
pub struct SearchParams {
    pub q: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

impl SearchParams {
    /// Pick `q`, `name` and `role` out of decoded query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = SearchParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut params.q,
                "name" => &mut params.name,
                "role" => &mut params.role,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// Search terms after trimming and lowercasing. Absent parameters are empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: String,
    pub name: String,
    pub role: String,
}

impl SearchQuery {
    pub fn normalize(params: &SearchParams) -> Self {
        SearchQuery {
            q: normalize_term(params.q.as_deref()),
            name: normalize_term(params.name.as_deref()),
            role: normalize_term(params.role.as_deref()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty() && self.name.is_empty() && self.role.is_empty()
    }

    fn matches(&self, player: &Player) -> bool {
        let player_name = player.name.to_lowercase();
        let player_role = player.role.to_lowercase();

        if !self.q.is_empty() {
            return player_name.contains(&self.q) || player_role.contains(&self.q);
        }

        // Name is a substring match, role must match exactly.
        let name_matches = self.name.is_empty() || player_name.contains(&self.name);
        let role_matches = self.role.is_empty() || player_role == self.role;
        name_matches && role_matches
    }

    fn no_results(&self) -> ApiError {
        let message = if !self.name.is_empty() {
            format!(
                "No players found with name containing '{}'. Try searching with '?q={}' to search both names and roles.",
                self.name, self.name
            )
        } else if !self.role.is_empty() {
            format!(
                "No players found with role '{}'. Valid roles are: {}",
                self.role,
                VALID_ROLES.join(", ")
            )
        } else {
            format!(
                "No players found matching '{}'. Try different search terms.",
                self.q
            )
        };

        ApiError::NoResults(message)
    }
}

fn normalize_term(raw: Option<&str>) -> String {
    raw.unwrap_or_default().trim().to_lowercase()
}

/// Returns the first role keyword contained in a normalized `name` term.
pub fn role_keyword_in(name: &str) -> Option<&'static str> {
    ROLE_KEYWORDS.iter().copied().find(|keyword| name.contains(*keyword))
}

/// Filter `players` by `query`, keeping store order.
pub fn filter_players<'a>(
    players: &'a [Player],
    query: &SearchQuery,
) -> Result<Vec<&'a Player>, ApiError> {
    if query.is_empty() {
        return Err(ApiError::MissingQuery);
    }

    if !query.name.is_empty() && role_keyword_in(&query.name).is_some() {
        return Err(ApiError::RoleAsName {
            term: query.name.clone(),
        });
    }

    let matched: Vec<&Player> = players.iter().filter(|p| query.matches(p)).collect();

    if matched.is_empty() {
        return Err(query.no_results());
    }

    Ok(matched)
}
