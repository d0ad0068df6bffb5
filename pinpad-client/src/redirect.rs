//! Delayed navigation after a successful validation.

use std::{sync::Arc, time::Duration};

use tokio::task::JoinHandle;

/// Performs the actual navigation (open a browser, print a URL, ...).
pub trait Navigator: Send + Sync + 'static {
    fn navigate(&self, url: &str);
}

/// A navigation that should happen once `delay` has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub url: String,
    pub delay: Duration,
}

impl Redirect {
    /// Spawn a task that sleeps for `delay` and then navigates.
    ///
    /// Aborting the returned handle cancels the redirect.
    pub fn schedule<N: Navigator>(self, navigator: Arc<N>) -> JoinHandle<()> {
        tokio::spawn(async move {
            tokio::time::sleep(self.delay).await;
            tracing::info!(url = %self.url, "redirecting");
            navigator.navigate(&self.url);
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        fn visited(&self) -> Vec<String> {
            match self.visited.lock() {
                Ok(v) => v.clone(),
                Err(e) => panic!("navigator lock poisoned: {e}"),
            }
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &str) {
            if let Ok(mut v) = self.visited.lock() {
                v.push(url.to_owned());
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn navigates_only_after_delay() {
        let nav = Arc::new(RecordingNavigator::default());
        let redirect = Redirect {
            url: "https://xyz.com".to_owned(),
            delay: Duration::from_millis(1500),
        };
        let handle = redirect.schedule(Arc::clone(&nav));

        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(1499)).await;
        tokio::task::yield_now().await;
        assert!(nav.visited().is_empty(), "must not navigate before 1500ms");

        tokio::time::advance(Duration::from_millis(1)).await;
        if let Err(e) = handle.await {
            panic!("redirect task failed: {e}");
        }
        assert_eq!(nav.visited(), vec!["https://xyz.com".to_owned()]);
    }

    #[tokio::test(start_paused = true)]
    async fn aborting_cancels_navigation() {
        let nav = Arc::new(RecordingNavigator::default());
        let redirect = Redirect {
            url: "https://xyz.com".to_owned(),
            delay: Duration::from_millis(1500),
        };
        let handle = redirect.schedule(Arc::clone(&nav));
        handle.abort();
        tokio::time::advance(Duration::from_secs(5)).await;
        tokio::task::yield_now().await;
        assert!(nav.visited().is_empty(), "aborted redirect must not navigate");
    }
}
