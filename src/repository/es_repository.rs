use crate::common::*;

use crate::enums::check_error::*;

use crate::traits::repository::es_repository_trait::*;

#[derive(Debug, Getters, Clone)]
#[getset(get = "pub")]
pub struct EsRepositoryImpl {
    pub es_url: String,
    pub es_client: Elasticsearch,
}

impl EsRepositoryImpl {
    #[doc = "Elasticsearch connection constructor"]
    /// # Arguments
    /// * `es_url`      - Base URL of the monitored cluster, e.g. `http://10.0.0.1:9200`
    /// * `timeout_sec` - Request timeout; an expired timeout is reported as a transport failure
    ///
    /// # Returns
    /// * Result<Self, anyhow::Error>
    pub fn new(es_url: &str, timeout_sec: u64) -> Result<Self, anyhow::Error> {
        let url: Url = Url::parse(es_url).map_err(|e| {
            CheckError::Configuration(format!("Invalid Elasticsearch URL '{}': {}", es_url, e))
        })?;

        let conn_pool: SingleNodeConnectionPool = SingleNodeConnectionPool::new(url);

        let transport: Transport = TransportBuilder::new(conn_pool)
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .map_err(|e| {
                CheckError::Configuration(format!("Can't build Elasticsearch client: {}", e))
            })?;

        Ok(Self {
            es_url: es_url.to_string(),
            es_client: Elasticsearch::new(transport),
        })
    }

    #[doc = "Function that turns a response into JSON, separating transport from decoding failures."]
    async fn read_json(response: Response, caller: &str) -> Result<Value, anyhow::Error> {
        if !response.status_code().is_success() {
            error!(
                "[EsRepositoryImpl->{}] Failed to GET document: Status Code: {}",
                caller,
                response.status_code()
            );
            return Err(CheckError::Transport(format!(
                "Elasticsearch responded with status {}",
                response.status_code().as_u16()
            ))
            .into());
        }

        let body: String = response.text().await.map_err(|e| {
            error!("[EsRepositoryImpl->{}] {:?}", caller, e);
            CheckError::Transport("Failed to read response from Elasticsearch".to_string())
        })?;

        serde_json::from_str(&body).map_err(|e| {
            error!("[EsRepositoryImpl->{}] {:?}", caller, e);
            CheckError::MalformedData(
                "Failed to parse JSON response from Elasticsearch".to_string(),
            )
            .into()
        })
    }

    fn connect_failed(caller: &str, e: elasticsearch::Error) -> anyhow::Error {
        error!("[EsRepositoryImpl->{}] {:?}", caller, e);
        CheckError::Transport("Failed to connect to Elasticsearch".to_string()).into()
    }
}

#[async_trait]
impl EsRepository for EsRepositoryImpl {
    #[doc = "GET /_cluster/health"]
    async fn get_health_info(&self) -> Result<Value, anyhow::Error> {
        let response: Response = self
            .es_client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| Self::connect_failed("get_health_info()", e))?;

        Self::read_json(response, "get_health_info()").await
    }

    #[doc = "GET /_nodes/stats/<fields>"]
    /// # Arguments
    /// * `fields` - metric groups to return, all groups when empty
    ///
    /// # Returns
    /// * Result<Value, anyhow::Error>
    async fn get_node_stats(&self, fields: &[&str]) -> Result<Value, anyhow::Error> {
        let stats_parts: NodesStatsParts<'_> = if fields.is_empty() {
            NodesStatsParts::None
        } else {
            NodesStatsParts::Metric(fields)
        };

        let response: Response = self
            .es_client
            .nodes()
            .stats(stats_parts)
            .send()
            .await
            .map_err(|e| Self::connect_failed("get_node_stats()", e))?;

        Self::read_json(response, "get_node_stats()").await
    }

    fn get_cluster_url(&self) -> String {
        self.es_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn http_response(status_line: &str, content_type: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nX-Elastic-Product: Elasticsearch\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            content_type,
            body.len(),
            body
        )
    }

    /// Local HTTP responder answering one connection with `response`; returns its base URL.
    async fn serve_once(response: String) -> String {
        let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url: String = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf: [u8; 1024] = [0; 1024];

            /* GET requests carry no body: the head ends the request */
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n: usize = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        base_url
    }

    #[test]
    fn invalid_url_is_configuration_error() {
        let err: anyhow::Error = EsRepositoryImpl::new("not a url", 5).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CheckError>(),
            Some(CheckError::Configuration(_))
        ));
    }

    #[test]
    fn valid_url_builds_client() {
        let repo: EsRepositoryImpl = EsRepositoryImpl::new("http://127.0.0.1:9200", 5).unwrap();
        assert_eq!(repo.get_cluster_url(), "http://127.0.0.1:9200");
    }

    #[tokio::test]
    async fn unreachable_cluster_is_transport_error() {
        /* bind then release an ephemeral port so nothing listens on it */
        let port: u16 = {
            let listener: std::net::TcpListener =
                std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let repo: EsRepositoryImpl =
            EsRepositoryImpl::new(&format!("http://127.0.0.1:{}", port), 2).unwrap();
        let err: anyhow::Error = repo.get_health_info().await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<CheckError>(),
            Some(&CheckError::Transport(
                "Failed to connect to Elasticsearch".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn error_status_is_transport_error() {
        let base_url: String = serve_once(http_response(
            "503 Service Unavailable",
            "application/json",
            r#"{"error":"master_not_discovered_exception","status":503}"#,
        ))
        .await;

        let repo: EsRepositoryImpl = EsRepositoryImpl::new(&base_url, 5).unwrap();
        let err: anyhow::Error = repo.get_health_info().await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<CheckError>(),
            Some(&CheckError::Transport(
                "Elasticsearch responded with status 503".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn non_json_body_is_malformed_data() {
        let base_url: String =
            serve_once(http_response("200 OK", "text/plain", "<html>proxy login</html>")).await;

        let repo: EsRepositoryImpl = EsRepositoryImpl::new(&base_url, 5).unwrap();
        let err: anyhow::Error = repo.get_node_stats(&["os"]).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<CheckError>(),
            Some(&CheckError::MalformedData(
                "Failed to parse JSON response from Elasticsearch".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn json_body_is_returned() {
        let base_url: String = serve_once(http_response(
            "200 OK",
            "application/json",
            r#"{"status":"green","number_of_nodes":3}"#,
        ))
        .await;

        let repo: EsRepositoryImpl = EsRepositoryImpl::new(&base_url, 5).unwrap();
        let health: Value = repo.get_health_info().await.unwrap();
        assert_eq!(health["status"], "green");
        assert_eq!(health["number_of_nodes"], 3);
    }
}
