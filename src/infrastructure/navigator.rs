use super::send_feedback;
use crate::app::action::Action;
use crate::domain::ports::Navigator;
use tokio::sync::mpsc;

const INDEX_PAGE: &str = "index.html";

/// Navigation collaborator for a static site laid out as `/` plus nested pages.
pub struct SiteNavigator {
    location: String,
    tx: mpsc::Sender<Action>,
}

impl SiteNavigator {
    pub fn new(location: impl Into<String>, tx: mpsc::Sender<Action>) -> Self {
        Self {
            location: location.into(),
            tx,
        }
    }
}

impl Navigator for SiteNavigator {
    fn navigate(&mut self, destination: &str) {
        let href = resolve_relative(&self.location, destination);
        tracing::debug!(from = %self.location, to = %destination, %href, "navigating");
        self.location = destination.to_string();
        send_feedback(
            &self.tx,
            Action::Navigated {
                location: destination.to_string(),
                href,
            },
        );
    }
}

/// Resolves a root-absolute destination into a link relative to the
/// directory of `current`.
#[must_use]
pub fn resolve_relative(current: &str, destination: &str) -> String {
    if destination.contains("://") {
        return destination.to_string();
    }

    let from_dir = directory_segments(current);
    let mut target: Vec<&str> = destination.split('/').filter(|s| !s.is_empty()).collect();
    if destination.ends_with('/') || target.is_empty() {
        target.push(INDEX_PAGE);
    }
    // Last segment is the file itself
    let (file, target_dir) = match target.split_last() {
        Some((file, dir)) => (*file, dir),
        None => (INDEX_PAGE, &[][..]),
    };

    let common = from_dir
        .iter()
        .zip(target_dir)
        .take_while(|(a, b)| a == b)
        .count();
    let climb = from_dir.len() - common;

    let mut href = if climb == 0 {
        "./".to_string()
    } else {
        "../".repeat(climb)
    };
    for segment in &target_dir[common..] {
        href.push_str(segment);
        href.push('/');
    }
    href.push_str(file);
    href
}

fn directory_segments(location: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = location.split('/').filter(|s| !s.is_empty()).collect();
    if !location.ends_with('/') {
        segments.pop();
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_root() {
        assert_eq!(resolve_relative("/", "/"), "./index.html");
        assert_eq!(
            resolve_relative("/", "/pages/pricing.html"),
            "./pages/pricing.html"
        );
        assert_eq!(
            resolve_relative("/index.html", "/pages/games.html"),
            "./pages/games.html"
        );
    }

    #[test]
    fn test_from_nested_page() {
        assert_eq!(resolve_relative("/pages/pricing.html", "/"), "../index.html");
        assert_eq!(
            resolve_relative("/pages/pricing.html", "/pages/terms.html"),
            "./terms.html"
        );
        assert_eq!(
            resolve_relative("/pages/docs/intro.html", "/pages/terms.html"),
            "../terms.html"
        );
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        assert_eq!(
            resolve_relative("/pages/a.html", "https://example.com/x"),
            "https://example.com/x"
        );
    }

    #[tokio::test]
    async fn test_navigate_reports_and_moves() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut nav = SiteNavigator::new("/pages/pricing.html", tx);

        nav.navigate("/");
        assert_eq!(nav.location, "/");
        assert_eq!(
            rx.recv().await,
            Some(Action::Navigated {
                location: "/".to_string(),
                href: "../index.html".to_string(),
            })
        );

        nav.navigate("/pages/games.html");
        assert_eq!(
            rx.recv().await,
            Some(Action::Navigated {
                location: "/pages/games.html".to_string(),
                href: "./pages/games.html".to_string(),
            })
        );
    }

    #[test]
    fn test_full_channel_does_not_block() {
        let (tx, _rx) = mpsc::channel(1);
        let mut nav = SiteNavigator::new("/", tx);
        nav.navigate("/pages/a.html");
        nav.navigate("/pages/b.html");
        assert_eq!(nav.location, "/pages/b.html");
    }
}
