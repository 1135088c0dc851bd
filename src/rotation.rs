//! Notice marquee and hero slideshow.
//!
//! The browser does the scrolling and the slide timer; this module owns the
//! data side: what the marquee contains, which slide shows first, and the
//! feed of notice lists pushed to open pages when notices change.

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use futures::Stream;
use tokio::sync::broadcast::error::RecvError;

use crate::content::ContentRepo;
use crate::pages::fallback::rows_or;
use crate::types::{Notice, Table};

/// Period of the hero slideshow.
pub const SLIDE_INTERVAL: Duration = Duration::from_secs(5);

pub const DEFAULT_NOTICES: [&str; 4] = [
    "Admissions Open for Academic Year 2026-27",
    "Annual Sports Day - 25th November 2025",
    "Parent-Teacher Meeting - 30th November 2025",
    "Winter Vacation: 20th December to 5th January",
];

/// The marquee track: the list followed by itself, so the CSS animation can
/// scroll by half its width and loop seamlessly.
pub fn marquee<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().chain(items.iter()).cloned().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slideshow {
    len: usize,
    index: usize,
}

impl Slideshow {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// The slide showing after `elapsed` time on the page.
    #[must_use]
    pub fn at(len: usize, elapsed: Duration) -> Self {
        let mut show = Self::new(len);
        if len > 0 {
            let ticks = elapsed.as_millis() / SLIDE_INTERVAL.as_millis();
            show.index = (ticks % len as u128) as usize;
        }
        show
    }

    #[must_use]
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
}

/// Whether a notice's optional date window includes `today`. Dates that do
/// not parse leave that side of the window open.
#[must_use]
pub fn in_window(notice: &Notice, today: NaiveDate) -> bool {
    let started = parse_date(notice.start_date.as_deref()).is_none_or(|start| start <= today);
    let not_ended = parse_date(notice.end_date.as_deref()).is_none_or(|end| end >= today);
    started && not_ended
}

pub fn default_notices() -> Vec<String> {
    DEFAULT_NOTICES.iter().map(|s| s.to_string()).collect()
}

/// Active notice messages in display order, or the built-in four.
pub async fn current_notices(repo: &ContentRepo) -> Vec<String> {
    let today = Utc::now().date_naive();
    let notices = repo.active::<Notice>().await.map(|list| {
        list.into_iter()
            .filter(|n| in_window(n, today))
            .collect::<Vec<_>>()
    });
    rows_or(Table::Notices, notices, |n| n.message, default_notices)
}

/// Emits the current notice list immediately, then again after every write
/// to `notices`. A lagged receiver also triggers a refetch.
pub fn notice_updates(repo: ContentRepo) -> impl Stream<Item = Vec<String>> {
    let mut changes = repo.feed().subscribe();

    async_stream::stream! {
        yield current_notices(&repo).await;

        loop {
            match changes.recv().await {
                Ok(Table::Notices) => yield current_notices(&repo).await,
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!("Notice feed lagged by {skipped} changes, refetching");
                    yield current_notices(&repo).await;
                }
                Err(RecvError::Closed) => break,
            }
        }
    }
}
