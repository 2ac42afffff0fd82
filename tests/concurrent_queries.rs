use fgp_xmlpath::{query, Extraction, Selection};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed>
  <title>Releases</title>
  <entry>
    <title>v1.0</title>
    <link><href>https://example.com/1.0</href></link>
  </entry>
  <entry>
    <title>v1.1</title>
  </entry>
  <entry>
    <title>v2.0</title>
    <link><href>https://example.com/2.0</href></link>
  </entry>
</feed>"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_queries_match_sequential_results() {
    init_tracing();

    let paths = [
        "/feed/title",
        "/feed/entry/title",
        "/feed/entry/link/href",
        "/feed/missing",
    ];
    let expected: Vec<_> = paths.iter().map(|path| query(FEED, path).unwrap()).collect();
    let expected = Arc::new(expected);

    let mut handles = Vec::new();
    for round in 0..32 {
        let expected = Arc::clone(&expected);
        handles.push(tokio::spawn(async move {
            let index = round % paths.len();
            let result = query(FEED, paths[index]).unwrap();
            assert_eq!(result, expected[index]);
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(expected[0].values(), &["Releases"]);
    assert_eq!(expected[1].values(), &["v1.0", "v1.1", "v2.0"]);
    assert_eq!(
        expected[2].values(),
        &["https://example.com/1.0", "https://example.com/2.0"]
    );
    assert!(expected[3].is_empty());
}

#[tokio::test]
async fn extraction_runs_on_blocking_pool() {
    init_tracing();

    let extraction = Extraction::new("releases")
        .add(Selection::at("/feed/entry/title").output("titles"))
        .add(Selection::at("/feed/entry/link/href").output("links"))
        .build();

    let outcome = tokio::task::spawn_blocking(move || extraction.run(FEED))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(outcome.output("titles").unwrap(), vec!["v1.0", "v1.1", "v2.0"]);
    assert_eq!(outcome.output("links").unwrap().len(), 2);
}
