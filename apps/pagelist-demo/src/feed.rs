//! Background page source.
//!
//! Runs on its own thread and answers `FeedRequest`s over a channel. The
//! event loop never blocks in the load-more callback; it only sends a
//! request and later drains the matching `FeedResponse`.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use pagelist_core::LoadResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedRequest {
    NextPage,
    Shutdown,
}

#[derive(Debug)]
pub struct FeedResponse {
    pub page: usize,
    pub result: LoadResult<String>,
}

/// Shape of the simulated backend.
#[derive(Clone, Debug)]
pub struct FeedConfig {
    pub page_size: usize,
    /// Pages served before the feed reports the end.
    pub pages: usize,
    /// Page whose first attempt fails.
    pub flaky_page: Option<usize>,
    pub latency: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            pages: 4,
            flaky_page: Some(2),
            latency: Duration::from_millis(40),
        }
    }
}

pub struct Feed {
    requests: Sender<FeedRequest>,
    responses: Receiver<FeedResponse>,
    worker: Option<JoinHandle<()>>,
}

impl Feed {
    pub fn spawn(config: FeedConfig) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let worker = thread::spawn(move || serve(config, request_rx, response_tx));
        Self {
            requests: request_tx,
            responses: response_rx,
            worker: Some(worker),
        }
    }

    /// A handle the load-more callback can own.
    pub fn requester(&self) -> Sender<FeedRequest> {
        self.requests.clone()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<FeedResponse> {
        self.responses.recv_timeout(timeout).ok()
    }
}

impl Drop for Feed {
    fn drop(&mut self) {
        let _ = self.requests.send(FeedRequest::Shutdown);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("feed worker panicked");
            }
        }
    }
}

fn serve(config: FeedConfig, requests: Receiver<FeedRequest>, responses: Sender<FeedResponse>) {
    // Page 0 is the initial page the app is built with.
    let mut next_page = 1;
    let mut failed_once = false;

    while let Ok(request) = requests.recv() {
        if request == FeedRequest::Shutdown {
            break;
        }
        thread::sleep(config.latency);

        let page = next_page;
        let result = if next_page >= config.pages {
            LoadResult::EndOfData
        } else if config.flaky_page == Some(next_page) && !failed_once {
            failed_once = true;
            LoadResult::Failed(format!("page {next_page}: connection reset"))
        } else {
            let rows = page_rows(next_page, config.page_size);
            next_page += 1;
            if next_page == config.pages {
                LoadResult::LastPage(rows)
            } else {
                LoadResult::Page(rows)
            }
        };
        log::debug!("feed answering page {page}: {}", describe(&result));

        let response = FeedResponse { page, result };
        if responses.send(response).is_err() {
            break;
        }
    }
    log::debug!("feed worker stopped");
}

pub fn page_rows(page: usize, page_size: usize) -> Vec<String> {
    let start = page * page_size;
    (start..start + page_size)
        .map(|i| format!("Message #{i}"))
        .collect()
}

pub fn describe<T>(result: &LoadResult<T>) -> String {
    match result {
        LoadResult::Page(rows) => format!("{} rows", rows.len()),
        LoadResult::LastPage(rows) => format!("{} rows (last)", rows.len()),
        LoadResult::Failed(reason) => format!("failed: {reason}"),
        LoadResult::EndOfData => "end of data".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(pages: usize, flaky_page: Option<usize>) -> Feed {
        Feed::spawn(FeedConfig {
            page_size: 3,
            pages,
            flaky_page,
            latency: Duration::ZERO,
        })
    }

    fn next(feed: &Feed) -> FeedResponse {
        feed.requester().send(FeedRequest::NextPage).unwrap();
        feed.recv_timeout(Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_flaky_page_fails_once_then_serves() {
        let feed = instant(4, Some(1));
        assert!(matches!(next(&feed).result, LoadResult::Failed(_)));
        let retry = next(&feed);
        assert_eq!(retry.page, 1);
        match retry.result {
            LoadResult::Page(rows) => assert_eq!(rows[0], "Message #3"),
            other => panic!("expected a page, got {}", describe(&other)),
        }
    }

    #[test]
    fn test_last_page_then_end() {
        let feed = instant(2, None);
        assert!(matches!(next(&feed).result, LoadResult::LastPage(_)));
        assert!(matches!(next(&feed).result, LoadResult::EndOfData));
    }
}
