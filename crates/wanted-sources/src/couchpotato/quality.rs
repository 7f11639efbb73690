//! Translation of remote quality profiles into local quality requirement strings.
//!
//! Not every remote tag has an exact local counterpart; `BR-Disk` and `dvdr`
//! map to the closest available token.

use wanted_models::RemoteQualityProfile;

/// Remote source/type tag → local source token
static SOURCES: &[(&str, &str)] = &[
    ("BR-Disk", "remux"),
    ("brrip", "bluray"),
    ("dvdr", "dvdrip"),
    ("dvdrip", "dvdrip"),
    ("scr", "dvdscr"),
    ("r5", "r5"),
    ("tc", "tc"),
    ("ts", "ts"),
    ("cam", "cam"),
];

/// Remote resolution tag → local resolution token
static RESOLUTIONS: &[(&str, &str)] = &[("1080p", "1080p"), ("720p", "720p")];

fn lookup(table: &'static [(&'static str, &'static str)], tag: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(remote, _)| *remote == tag)
        .map(|(_, local)| *local)
}

/// Map every tag through `table`, dropping unknown tags and repeated tokens.
/// 3D variants of a quality arrive as separate tags that collapse to the same token.
fn unique_tokens(qualities: &[String], table: &'static [(&'static str, &'static str)]) -> Vec<&'static str> {
    let mut tokens: Vec<&'static str> = Vec::new();
    for token in qualities.iter().filter_map(|tag| lookup(table, tag)) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

/// Build `"{resolutions} {sources}"`, each half `|`-joined.
///
/// The separating space is always present, so an empty profile yields `" "`.
pub fn translate(profile: &RemoteQualityProfile) -> String {
    let resolutions = unique_tokens(&profile.qualities, RESOLUTIONS);
    let sources = unique_tokens(&profile.qualities, SOURCES);
    format!("{} {}", resolutions.join("|"), sources.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(qualities: &[&str]) -> RemoteQualityProfile {
        RemoteQualityProfile::new("p1", qualities)
    }

    fn sorted_half(half: &str) -> Vec<&str> {
        let mut tokens: Vec<&str> = half.split('|').filter(|t| !t.is_empty()).collect();
        tokens.sort_unstable();
        tokens
    }

    #[test]
    fn test_empty_profile_is_single_space() {
        assert_eq!(translate(&profile(&[])), " ");
    }

    #[test]
    fn test_resolution_and_source() {
        assert_eq!(translate(&profile(&["720p", "brrip"])), "720p bluray");
    }

    #[test]
    fn test_duplicates_collapse() {
        let result = translate(&profile(&["1080p", "720p", "brrip", "brrip"]));
        let (resolutions, sources) = result.split_once(' ').unwrap();

        assert_eq!(sorted_half(resolutions), vec!["1080p", "720p"]);
        assert_eq!(sources, "bluray");
    }

    #[test]
    fn test_tags_mapping_to_same_token_appear_once() {
        let result = translate(&profile(&["dvdr", "dvdrip", "cam"]));
        let (resolutions, sources) = result.split_once(' ').unwrap();

        assert_eq!(resolutions, "");
        assert_eq!(sorted_half(sources), vec!["cam", "dvdrip"]);
    }

    #[test]
    fn test_full_source_table() {
        let result = translate(&profile(&["BR-Disk", "brrip", "dvdr", "dvdrip", "scr", "r5", "tc", "ts", "cam"]));
        let (resolutions, sources) = result.split_once(' ').unwrap();

        assert_eq!(resolutions, "");
        assert_eq!(
            sorted_half(sources),
            vec!["bluray", "cam", "dvdrip", "dvdscr", "r5", "remux", "tc", "ts"]
        );
    }

    #[test]
    fn test_unknown_tags_ignored() {
        assert_eq!(translate(&profile(&["2160p", "hdtv", "720p"])), "720p ");
        assert_eq!(translate(&profile(&["br-disk", "BRRip"])), " ");
    }

    #[test]
    fn test_no_duplicate_tokens_in_either_half() {
        let inputs: [&[&str]; 3] = [
            &["720p", "720p", "720p"],
            &["ts", "1080p", "ts", "1080p", "tc"],
            &["BR-Disk", "BR-Disk", "brrip", "scr", "scr"],
        ];
        for qualities in inputs {
            let result = translate(&profile(qualities));
            let (resolutions, sources) = result.split_once(' ').unwrap();
            for half in [resolutions, sources] {
                let tokens = sorted_half(half);
                let mut deduped = tokens.clone();
                deduped.dedup();
                assert_eq!(tokens, deduped, "duplicate token in {:?}", result);
            }
        }
    }
}
