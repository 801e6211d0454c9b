//! Runs the HTTP price source against a loopback server with canned replies.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use cart_core::{CoreError, Item, Order};
use cart_pricing::telemetry::init_test_tracing;
use cart_pricing::{
    DynamicallyPricedItem, ItemId, PriceLookup, PriceLookupConfig, PricingError, TransportError,
};
use rust_decimal_macros::dec;

enum Reply {
    Json(u16, &'static str),
    Hang(Duration),
}

struct StubServer {
    addr: SocketAddr,
    request_lines: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl StubServer {
    fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        let request_lines = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&request_lines);

        let handle = thread::spawn(move || {
            for reply in replies {
                let (mut stream, _) = listener.accept().expect("accept");
                let line = read_request_line(&mut stream);
                seen.lock().unwrap().push(line);

                match reply {
                    Reply::Json(status, body) => {
                        let response = format!(
                            "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                            body.len()
                        );
                        stream.write_all(response.as_bytes()).expect("write reply");
                        stream.flush().expect("flush reply");
                    }
                    Reply::Hang(duration) => thread::sleep(duration),
                }
            }
        });

        StubServer {
            addr,
            request_lines,
            handle,
        }
    }

    fn lookup(&self) -> PriceLookup {
        self.lookup_with_timeout(None)
    }

    fn lookup_with_timeout(&self, timeout_secs: Option<u64>) -> PriceLookup {
        let mut config = PriceLookupConfig::default();
        config.lookup.endpoint = format!("http://{}/getitem", self.addr);
        config.lookup.timeout_secs = timeout_secs;
        PriceLookup::from_config(&config).expect("lookup from config")
    }

    fn finish(self) -> Vec<String> {
        self.handle.join().expect("stub server thread");
        Arc::try_unwrap(self.request_lines)
            .expect("single owner")
            .into_inner()
            .unwrap()
    }
}

fn read_request_line(stream: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 512];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).expect("read request");
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
    }
    String::from_utf8_lossy(&head)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

#[test]
fn fetches_price_over_http() {
    init_test_tracing();
    let server = StubServer::start(vec![Reply::Json(200, r#"{"price": 12.34567}"#)]);

    let item = DynamicallyPricedItem::new(12345u64, server.lookup());
    assert_eq!(item.calculate_item_total().unwrap().cents(), 1235);

    assert_eq!(server.finish(), ["GET /getitem/12345 HTTP/1.1"]);
}

#[test]
fn absent_id_requests_none_segment() {
    init_test_tracing();
    let server = StubServer::start(vec![Reply::Json(200, r#"{"price": null}"#)]);

    let item = DynamicallyPricedItem::new(ItemId::absent(), server.lookup());
    assert_eq!(item.get_latest_price().unwrap(), None);

    assert_eq!(server.finish(), ["GET /getitem/None HTTP/1.1"]);
}

#[test]
fn error_status_without_price_is_lookup_error() {
    init_test_tracing();
    let server = StubServer::start(vec![Reply::Json(404, r#"{"error": "unknown item"}"#)]);

    let item = DynamicallyPricedItem::new(99u64, server.lookup());
    let err = item.get_latest_price().unwrap_err();
    assert!(matches!(err, PricingError::MissingField { .. }));

    server.finish();
}

#[test]
fn non_json_body_is_transport_error() {
    init_test_tracing();
    let server = StubServer::start(vec![Reply::Json(200, "<html>maintenance</html>")]);

    let item = DynamicallyPricedItem::new(1u64, server.lookup());
    let err = item.get_latest_price().unwrap_err();
    assert!(matches!(
        err,
        PricingError::Transport(TransportError::Decode { .. })
    ));

    server.finish();
}

#[test]
fn configured_timeout_stops_a_hanging_request() {
    init_test_tracing();
    let server = StubServer::start(vec![Reply::Hang(Duration::from_secs(3))]);

    let item = DynamicallyPricedItem::new(1u64, server.lookup_with_timeout(Some(1)));
    let err = item.get_latest_price().unwrap_err();
    assert!(matches!(
        err,
        PricingError::Transport(TransportError::Request(_))
    ));

    server.finish();
}

#[test]
fn order_prices_dynamic_items_sequentially_in_order() {
    init_test_tracing();
    let server = StubServer::start(vec![
        Reply::Json(200, r#"{"price": 2.5}"#),
        Reply::Json(200, r#"{"price": 10}"#),
    ]);
    let lookup = server.lookup();

    let mut order = Order::with_charges(dec!(0), dec!(0), dec!(0.1));
    order.add_item(DynamicallyPricedItem::with_quantity("b-2", 2, lookup.clone()));
    order.add_item(Item::new("stuff", dec!(1)));
    order.add_item(DynamicallyPricedItem::new("a-1", lookup));

    let summary = order.summary().unwrap();
    // (5.00 + 1.00 + 10.00) × 1.1 = 17.60
    assert_eq!(summary.subtotal.cents(), 1600);
    assert_eq!(summary.total.cents(), 1760);
    assert_eq!(summary.reward_points, dec!(17.776));

    assert_eq!(
        server.finish(),
        ["GET /getitem/b-2 HTTP/1.1", "GET /getitem/a-1 HTTP/1.1"]
    );
}

#[test]
fn failed_lookup_surfaces_through_order() {
    init_test_tracing();
    let server = StubServer::start(vec![Reply::Json(200, r#"{"XXpriceXX": 100.0}"#)]);

    let mut order = Order::new();
    order.add_item(DynamicallyPricedItem::new(12345u64, server.lookup()));

    let err = order.calculate_order_total().unwrap_err();
    match err {
        CoreError::LineItem { label, source } => {
            assert_eq!(label, "item 12345");
            let pricing = source.downcast_ref::<PricingError>().expect("pricing error");
            assert!(pricing.is_lookup_error());
        }
        other => panic!("unexpected error: {other:?}"),
    }

    server.finish();
}
