use tracing::instrument;

use crate::error::Result;
use crate::model::PlayerStatSet;
use crate::scraper;

/// Fetches player profile pages and turns them into per-class stats.
///
/// `StatsClient` wraps a [`reqwest::Client`] together with the host serving
/// `/players/<name>` pages.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> ctf_leaderboards::Result<()> {
/// use ctf_leaderboards::{CtfClass, StatsClient};
///
/// let client = StatsClient::new("www.brawl.com");
/// let stats = client.get_player_stats("Notch").await?;
/// if let Some(archer) = stats.get(&CtfClass::Archer) {
///     println!("archer kills: {:?}", archer.get("kills"));
/// }
/// # Ok(())
/// # }
/// ```
pub struct StatsClient {
    http: reqwest::Client,
    host: String,
}

impl StatsClient {
    /// Create a new client with default settings.
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), host)
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, host: impl Into<String>) -> Self {
        Self {
            http: client,
            host: host.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Fetch a player's profile and parse the classes they have CTF stats for.
    ///
    /// Any response other than 200 OK is returned as
    /// [`LeaderboardError::UnexpectedStatus`](crate::LeaderboardError::UnexpectedStatus).
    #[instrument(skip(self))]
    pub async fn get_player_stats(&self, name: &str) -> Result<PlayerStatSet> {
        scraper::profile::get_player_stats(&self.http, &self.host, name).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::error::LeaderboardError;
    use crate::model::CtfClass;
    use crate::scraper::profile::tests::profile_page;

    /// Serve `responses` in order, one connection each, and return the
    /// `host:port` to reach them.
    pub(crate) async fn serve(responses: Vec<(u16, String)>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await.unwrap();
                let response = format!(
                    "HTTP/1.1 {status} X\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
            }
        });
        addr.to_string()
    }

    #[tokio::test]
    async fn test_get_player_stats() {
        let page = profile_page(&[(
            "ctf-dwarf",
            r#"<li>Playtime: <span class="killstat">1y</span></li>
               <li>Kills: <span class="killstat">3</span></li>"#,
        )]);
        let host = serve(vec![(200, page)]).await;

        let client = StatsClient::new(host);
        let stats = client.get_player_stats("steve").await.unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[&CtfClass::Dwarf].get("playtime"), Some(365.0));
    }

    #[tokio::test]
    async fn test_non_ok_status_is_an_error() {
        let host = serve(vec![(404, "not found".to_string())]).await;

        let client = StatsClient::new(host);
        let err = client.get_player_stats("nobody").await.unwrap_err();
        match err {
            LeaderboardError::UnexpectedStatus { status, url } => {
                assert_eq!(status.as_u16(), 404);
                assert!(url.ends_with("/players/nobody"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
