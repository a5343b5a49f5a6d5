//! Tests for the TCP server against loopback clients.

use std::net::SocketAddr;
use std::time::Duration;
use tictactoe_server::{Config, Server};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

async fn start_server() -> SocketAddr {
    let config = Config::quiet().with_host("127.0.0.1").with_port(0);
    let server = Server::bind(config).await.expect("bind loopback");
    let addr = server.local_addr().unwrap();
    tokio::spawn(server.run());
    addr
}

/// Sends the whole script, then reads until the server hangs up.
async fn client(addr: SocketAddr, script: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    stream.write_all(script.as_bytes()).await.unwrap();

    let mut output = String::new();
    tokio::time::timeout(Duration::from_secs(10), stream.read_to_string(&mut output))
        .await
        .expect("server closed the connection")
        .unwrap();
    output
}

#[tokio::test]
async fn test_full_match_over_tcp() {
    let addr = start_server().await;
    let output = client(addr, "Ann\nX\nBob\n0\n3\n1\n4\n2\nn\n").await;

    assert!(output.starts_with("Enter Player1 Name: "));
    assert!(output.contains("Congrats Ann Wins\n"));
    assert!(output.ends_with("Do you want to Play Again [y/n]: "));
}

#[tokio::test]
async fn test_connections_are_independent() {
    let addr = start_server().await;

    let winner = client(addr, "Ann\nX\nBob\n0\n3\n1\n4\n2\nn\n");
    let tie = client(addr, "Cy\nO\nDee\n0\n1\n2\n4\n3\n5\n7\n6\n8\nno\n");
    let (winner, tie) = tokio::join!(winner, tie);

    assert!(winner.contains("Congrats Ann Wins"));
    assert!(!winner.contains("Cy"));
    assert!(tie.contains("Match Got Tie"));
    assert!(tie.contains("Name: Cy Choice: O\nName: Dee Choice: X\n"));
    assert!(!tie.contains("Ann"));
}

#[tokio::test]
async fn test_client_hangup_closes_session() {
    let addr = start_server().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(b"Ann\n").await.unwrap();
    stream.shutdown().await.unwrap();

    let mut output = String::new();
    tokio::time::timeout(Duration::from_secs(10), stream.read_to_string(&mut output))
        .await
        .expect("server closed the connection")
        .unwrap();
    assert!(output.ends_with("Enter Marker Choice For Ann [X/O]: "));

    // The listener keeps serving after a session dies.
    let output = client(addr, "Ann\nX\nBob\n0\n3\n1\n4\n2\nn\n").await;
    assert!(output.contains("Congrats Ann Wins"));
}

#[tokio::test]
async fn test_bind_conflict_is_an_error() {
    let addr = start_server().await;
    let config = Config::quiet().with_host("127.0.0.1").with_port(addr.port());
    assert!(Server::bind(config).await.is_err());
}
