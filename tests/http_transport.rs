//! Transports against a one-shot HTTP server bound on the loopback interface.

use neo_orbit::{
    sbdb::transport::{LocalProxyTransport, PublicRelayTransport},
    LookupConfig, LookupEnv, LookupTransport, OrbitResolver, SearchOutcome,
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};

/// Serve a single request with `status` and `body`, returning the request line.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (base_url, handle)
}

#[tokio::test]
async fn local_proxy_returns_json_body() {
    let (base_url, server) =
        serve_once("200 OK", r#"{"code":300,"list":[{"pdes":"2000 AA"}]}"#).await;
    let transport = LocalProxyTransport::new(reqwest::Client::new(), &base_url).unwrap();

    let value = transport.fetch("2000 aa").await.unwrap();
    assert_eq!(value["list"][0]["pdes"], "2000 AA");
    assert_eq!(
        server.await.unwrap(),
        "GET /api/asteroid/2000%20aa HTTP/1.1"
    );
}

#[tokio::test]
async fn server_error_is_a_transport_failure() {
    let (base_url, _server) = serve_once(
        "500 Internal Server Error",
        r#"{"error":"Failed to fetch asteroid data"}"#,
    )
    .await;
    let transport = LocalProxyTransport::new(reqwest::Client::new(), &base_url).unwrap();

    assert!(transport.fetch("eros").await.is_err());
}

#[tokio::test]
async fn non_json_body_is_a_transport_failure() {
    let (base_url, _server) = serve_once("200 OK", "<html>rate limited</html>").await;
    let transport = LocalProxyTransport::new(reqwest::Client::new(), &base_url).unwrap();

    assert!(transport.fetch("eros").await.is_err());
}

#[tokio::test]
async fn relay_forwards_wrapped_upstream_url() {
    let (base_url, server) = serve_once(
        "200 OK",
        concat!(
            r#"{"object":{"fullname":"99942 Apophis (2004 MN4)"},"#,
            r#""orbit":{"elements":[{"name":"a","value":"0.9224"},"#,
            r#"{"name":"e","value":"0.1911"},{"name":"per","value":"323.6"}]}}"#,
        ),
    )
    .await;
    let transport = PublicRelayTransport::new(
        reqwest::Client::new(),
        &format!("{base_url}/raw"),
        "https://ssd-api.jpl.nasa.gov/sbdb.api",
    )
    .unwrap();

    let value = transport.fetch("2004 mn4").await.unwrap();
    assert_eq!(value["object"]["fullname"], "99942 Apophis (2004 MN4)");

    let request_line = server.await.unwrap();
    let wrapped = "GET /raw?url=https%3A%2F%2Fssd-api.jpl.nasa.gov%2Fsbdb.api%3Fsstr%3D2004";
    assert!(request_line.starts_with(wrapped));
}

#[tokio::test]
async fn resolver_falls_back_from_dead_proxy_to_relay() {
    let (relay_base, _server) = serve_once(
        "200 OK",
        concat!(
            r#"{"object":{"shortname":"2024 YR4"},"#,
            r#""orbit":{"elements":[{"name":"a","value":"2.516"},"#,
            r#"{"name":"e","value":"0.6615"},{"name":"per","value":"1458"}]}}"#,
        ),
    )
    .await;

    // nothing listens on the discard port
    let config = LookupConfig {
        local_proxy_url: "http://127.0.0.1:9".into(),
        relay_url: format!("{relay_base}/raw"),
        timeout_secs: 5,
        ..LookupConfig::default()
    };
    let env = LookupEnv::new(config).unwrap();
    let resolver: OrbitResolver<_, _> = env.resolver().unwrap();
    assert_eq!(resolver.primary().label(), "local proxy");
    assert_eq!(resolver.fallback().label(), "public relay");

    let outcome = resolver.resolve("2024 YR4").await.unwrap();
    let SearchOutcome::Found(elements) = outcome else {
        panic!("expected the relay answer, got {outcome}");
    };
    assert_eq!(elements.name(), "2024 YR4");
    assert_eq!(elements.eccentricity(), 0.6615);
}
