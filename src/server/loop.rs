// Server loop module
// Accepts connections until the shutdown future resolves

use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Accept connections on `listener` until `shutdown` completes.
///
/// Connections already handed to their own tasks keep running after the
/// listener is dropped.
#[allow(clippy::ignored_unit_patterns)]
pub async fn start_server_loop<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F)
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            _ = &mut shutdown => break,
        }
    }

    drop(listener);
    logger::log_shutdown(state.active_connection_count());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    use crate::config::Config;
    use crate::server::create_reusable_listener;
    use http_body_util::{BodyExt, Full};
    use hyper::body::Bytes;
    use hyper::{Method, Request, StatusCode};
    use hyper_util::client::legacy::Client;
    use hyper_util::rt::TokioExecutor;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_serves_requests_until_shutdown() {
        let mut cfg = Config::load_from("this-config-file-does-not-exist").unwrap();
        cfg.logging.access_log = false;
        let state = Arc::new(AppState::new(cfg));

        let listener = create_reusable_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let server = tokio::spawn(start_server_loop(listener, state, async {
            let _ = stop_rx.await;
        }));

        let client = Client::builder(TokioExecutor::new()).build_http::<Full<Bytes>>();

        let cases = [
            ("/fibonacci/10", "", StatusCode::OK, r#"{"result":55}"#),
            ("/factorial?n=6", "", StatusCode::OK, r#"{"result":720}"#),
            ("/mean", "[1,2,3]", StatusCode::OK, r#"{"result":2.0}"#),
            ("/mean", "[]", StatusCode::BAD_REQUEST, r#"{"detail":"Array must not be empty"}"#),
            ("/unknown", "", StatusCode::NOT_FOUND, "Not Found"),
        ];

        for (path, body, status, expected) in cases {
            let req = Request::builder()
                .method(Method::GET)
                .uri(format!("http://{addr}{path}"))
                .body(Full::new(Bytes::from_static(body.as_bytes())))
                .unwrap();
            let resp = client.request(req).await.unwrap();
            assert_eq!(resp.status(), status, "{path}");
            let bytes = resp.into_body().collect().await.unwrap().to_bytes();
            assert_eq!(bytes, Bytes::from_static(expected.as_bytes()), "{path}");
        }

        stop_tx.send(()).unwrap();
        server.await.unwrap();
    }

    #[test]
    fn test_slow_computation_does_not_outlive_connection_timeout() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();

        runtime.block_on(async {
            let mut cfg = Config::load_from("this-config-file-does-not-exist").unwrap();
            cfg.logging.access_log = false;
            cfg.performance.read_timeout = 1;
            cfg.performance.write_timeout = 1;
            let state = Arc::new(AppState::new(cfg));

            let listener = create_reusable_listener("127.0.0.1:0".parse().unwrap()).unwrap();
            let addr = listener.local_addr().unwrap();

            let (stop_tx, stop_rx) = oneshot::channel::<()>();
            let server = tokio::spawn(start_server_loop(listener, state, async {
                let _ = stop_rx.await;
            }));

            let request = |path: &str| {
                Request::builder()
                    .method(Method::GET)
                    .uri(format!("http://{addr}{path}"))
                    .body(Full::new(Bytes::new()))
                    .unwrap()
            };

            let started = Instant::now();
            let slow_client = Client::builder(TokioExecutor::new()).build_http::<Full<Bytes>>();
            let slow = tokio::spawn(slow_client.request(request("/factorial?n=200000")));

            // The single runtime worker stays free for other connections
            tokio::time::sleep(Duration::from_millis(100)).await;
            let fast_client = Client::builder(TokioExecutor::new()).build_http::<Full<Bytes>>();
            let fast = fast_client.request(request("/factorial?n=5")).await.unwrap();
            assert_eq!(fast.status(), StatusCode::OK);
            let bytes = fast.into_body().collect().await.unwrap().to_bytes();
            assert_eq!(bytes, Bytes::from_static(br#"{"result":120}"#));

            // The connection is closed at the timeout, long before 200000! is done
            let outcome = slow.await.unwrap();
            assert!(outcome.is_err(), "expected the connection to be cut");
            assert!(
                started.elapsed() < Duration::from_secs(3),
                "took {:?}",
                started.elapsed()
            );

            stop_tx.send(()).unwrap();
            server.await.unwrap();
        });

        // The abandoned product is still being computed on the blocking pool
        runtime.shutdown_background();
    }
}
