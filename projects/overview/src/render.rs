use interfaces_github_repos::index::RepoNode;

/// Renders the overview table: two header lines, one row per repository,
/// most recently pushed first.
///
/// Names and URLs are emitted verbatim; markdown metacharacters in a
/// repository name corrupt that row.
pub fn render_overview_table(repos: &[RepoNode]) -> String {
    let mut sorted: Vec<&RepoNode> = repos.iter().collect();
    // Stable sort: repositories pushed at the same instant keep server order.
    sorted.sort_by(|a, b| b.pushed_at.cmp(&a.pushed_at));

    let mut lines = vec![
        "| Repository | Lang | ★ | Last push |".to_string(),
        "|-----------|------|---|-----------|".to_string(),
    ];

    for repo in sorted {
        let language = repo
            .primary_language
            .as_ref()
            .map(|language| language.name.as_str())
            .unwrap_or("");

        lines.push(format!(
            "| [{}]({}) | {} | {} | {} |",
            repo.name,
            repo.url,
            language,
            repo.stargazer_count,
            repo.pushed_at.format("%Y-%m-%d"),
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use interfaces_github_repos::index::LanguageNode;

    fn repo(name: &str, url: &str, stars: u32, language: Option<&str>, pushed: &str) -> RepoNode {
        RepoNode {
            name: name.to_string(),
            description: None,
            stargazer_count: stars,
            primary_language: language.map(|name| LanguageNode {
                name: name.to_string(),
            }),
            pushed_at: pushed.parse::<DateTime<Utc>>().unwrap(),
            url: url.to_string(),
        }
    }

    #[test]
    fn renders_two_header_lines_plus_one_row_per_repo() {
        let repos = vec![
            repo("a", "https://x/a", 0, None, "2023-05-01T12:00:00Z"),
            repo("b", "https://x/b", 1, Some("Rust"), "2023-06-01T12:00:00Z"),
            repo("c", "https://x/c", 2, Some("C"), "2023-07-01T12:00:00Z"),
        ];

        assert_eq!(render_overview_table(&repos).lines().count(), repos.len() + 2);
        assert_eq!(render_overview_table(&[]).lines().count(), 2);
    }

    #[test]
    fn sorts_by_push_date_descending() {
        let repos = vec![
            repo("old", "https://x/old", 3, None, "2022-01-01T00:00:00Z"),
            repo("new", "https://x/new", 1, None, "2024-06-01T00:00:00Z"),
            repo("mid", "https://x/mid", 2, None, "2023-01-01T00:00:00Z"),
        ];

        let table = render_overview_table(&repos);
        let rows: Vec<&str> = table.lines().skip(2).collect();

        assert!(rows[0].contains("[new]"));
        assert!(rows[1].contains("[mid]"));
        assert!(rows[2].contains("[old]"));
    }

    #[test]
    fn ties_keep_server_order() {
        let repos = vec![
            repo("first", "https://x/first", 0, None, "2024-01-01T00:00:00Z"),
            repo("second", "https://x/second", 0, None, "2024-01-01T00:00:00Z"),
        ];

        let table = render_overview_table(&repos);
        let rows: Vec<&str> = table.lines().skip(2).collect();

        assert!(rows[0].contains("[first]"));
        assert!(rows[1].contains("[second]"));
    }

    #[test]
    fn missing_language_renders_empty_cell_and_date_is_truncated() {
        let repos = vec![
            repo("foo", "https://x/foo", 5, Some("Go"), "2024-01-02T00:00:00Z"),
            repo("bar", "https://x/bar", 10, None, "2024-03-01T00:00:00Z"),
        ];

        let table = render_overview_table(&repos);
        let rows: Vec<&str> = table.lines().skip(2).collect();

        assert_eq!(rows[0], "| [bar](https://x/bar) |  | 10 | 2024-03-01 |");
        assert_eq!(rows[1], "| [foo](https://x/foo) | Go | 5 | 2024-01-02 |");
    }
}
