//! Prompt assembly
//!
//! Pure, deterministic construction of the generation prompt from the user
//! query and the retrieved matches. Formatting policy only: no retrieval
//! guarantees, no side effects.

use std::fmt::Write as _;

use anr_domain::value_objects::AnimeMatch;

/// System instruction prepended to every prompt
const SYSTEM_INSTRUCTION: &str = "You are an expert anime recommender. Your task is to provide a \
     compelling, paragraph-style recommendation for a user based on their query and a list of \
     potentially relevant anime. Analyze the provided anime details (genres, rating) to \
     understand the user's taste.\n\n\
     Your response should:\n\
     1. Be a single, fluid paragraph, not a list.\n\
     2. Recommend multiple suitable animes from the provided context (up to 10).\n\
     3. Explain WHY you are recommending them, connecting their themes or genres to the user's \
     query.\n\
     4. Be engaging, friendly, and encouraging.";

/// Placeholder rendered when retrieval produced no context
const NO_MATCHES_PLACEHOLDER: &str = "(no matches found in the catalog)";

/// Builds the final prompt sent to the generation provider
///
/// Stateless and side-effect-free; the same inputs always produce the same
/// prompt string.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new() -> Self {
        Self
    }

    /// Render the retrieved matches into a human-readable context block
    ///
    /// Matches are rendered in the order received. Missing genre lists
    /// render as "N/A" rather than any undefined token.
    pub fn format_context(&self, matches: &[AnimeMatch]) -> String {
        if matches.is_empty() {
            return NO_MATCHES_PLACEHOLDER.to_string();
        }

        let mut blocks = Vec::with_capacity(matches.len());
        for m in matches {
            let genres = if m.anime.genres.is_empty() {
                "N/A".to_string()
            } else {
                m.anime.genres.join(", ")
            };

            let mut block = String::new();
            let _ = writeln!(block, "Name: {}", m.anime.name);
            let _ = writeln!(block, "Genres: {}", genres);
            let _ = writeln!(block, "Type: {}", m.anime.anime_type);
            let _ = write!(block, "Rating: {}", m.anime.rating);
            blocks.push(block);
        }
        blocks.join("\n---\n")
    }

    /// Build the complete prompt string
    pub fn build(&self, query: &str, matches: &[AnimeMatch]) -> String {
        format!(
            "{SYSTEM_INSTRUCTION}\n\n\
             --- USER QUERY ---\n\
             {query}\n\n\
             --- RELEVANT ANIME CONTEXT ---\n\
             {context}\n\n\
             --- RECOMMENDATION ---\n",
            context = self.format_context(matches),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anr_domain::value_objects::Anime;

    fn match_for(name: &str, genres: &[&str]) -> AnimeMatch {
        AnimeMatch {
            anime: Anime {
                anime_id: 1,
                name: name.to_string(),
                genres: genres.iter().map(ToString::to_string).collect(),
                anime_type: "TV".to_string(),
                episodes: 12,
                rating: 7.5,
                members: 1000,
                synopsis: None,
            },
            score: 0.9,
        }
    }

    #[test]
    fn build_is_deterministic() {
        let builder = PromptBuilder::new();
        let matches = vec![match_for("Gurren Lagann", &["Mecha", "Action"])];
        assert_eq!(
            builder.build("mecha", &matches),
            builder.build("mecha", &matches)
        );
    }

    #[test]
    fn build_includes_query_and_match_details() {
        let prompt =
            PromptBuilder::new().build("space westerns", &[match_for("Cowboy Bebop", &["Sci-Fi"])]);
        assert!(prompt.contains("--- USER QUERY ---\nspace westerns"));
        assert!(prompt.contains("Name: Cowboy Bebop"));
        assert!(prompt.contains("Genres: Sci-Fi"));
        assert!(prompt.contains("Rating: 7.5"));
    }

    #[test]
    fn empty_matches_render_placeholder_not_none() {
        let prompt = PromptBuilder::new().build("anything", &[]);
        assert!(prompt.contains("no matches"));
        assert!(!prompt.contains("None"));
    }

    #[test]
    fn empty_genres_render_as_na() {
        let context = PromptBuilder::new().format_context(&[match_for("Obscure", &[])]);
        assert!(context.contains("Genres: N/A"));
    }

    #[test]
    fn matches_render_in_received_order() {
        let context = PromptBuilder::new()
            .format_context(&[match_for("First", &["A"]), match_for("Second", &["B"])]);
        let first = context.find("Name: First").unwrap();
        let second = context.find("Name: Second").unwrap();
        assert!(first < second);
    }
}
