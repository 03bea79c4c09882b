use interfaces_reddit_subreddit::index::{RedditClient, SubredditName};
use projects_subreddit_stats::endpoints::reddit::subreddit::{
    hot_titles::index::hot_titles,
    pagination::{walk_hot_listing, FetchHotPageError},
    subscribers::index::number_of_subscribers,
    top_ten::index::top_ten,
    word_count::index::{count_words, write_word_counts},
};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER_AGENT: &str = "subreddit_stats-tests/0.1";

fn listing(titles: &[&str], after: Option<&str>) -> Value {
    let children: Vec<Value> = titles
        .iter()
        .map(|title| json!({"kind": "t3", "data": {"title": title}}))
        .collect();

    json!({"kind": "Listing", "data": {"after": after, "children": children}})
}

fn client_for(server: &MockServer) -> RedditClient {
    RedditClient::new(&server.uri(), USER_AGENT, None).unwrap()
}

async fn mount_first_page(server: &MockServer, subreddit: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/r/{subreddit}/hot.json")))
        .and(query_param("limit", "100"))
        .and(query_param_is_missing("after"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_page_after(server: &MockServer, subreddit: &str, after: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/r/{subreddit}/hot.json")))
        .and(query_param("limit", "100"))
        .and(query_param("after", after))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn single_page_listing_issues_exactly_one_request() {
    let server = MockServer::start().await;
    mount_first_page(&server, "rust", listing(&["only page"], None)).await;

    let titles = hot_titles(&client_for(&server), "rust").await;

    assert_eq!(titles, Some(vec!["only page".to_string()]));
    server.verify().await;
}

#[tokio::test]
async fn hot_titles_follows_cursors_in_order() {
    let server = MockServer::start().await;
    mount_first_page(&server, "rust", listing(&["one", "two"], Some("t3_b"))).await;
    mount_page_after(
        &server,
        "rust",
        "t3_b",
        ResponseTemplate::new(200).set_body_json(listing(&["three"], Some("t3_c"))),
    )
    .await;
    mount_page_after(
        &server,
        "rust",
        "t3_c",
        ResponseTemplate::new(200).set_body_json(listing(&["four"], None)),
    )
    .await;

    let titles = hot_titles(&client_for(&server), "rust").await;

    assert_eq!(
        titles,
        Some(vec![
            "one".to_string(),
            "two".to_string(),
            "three".to_string(),
            "four".to_string(),
        ])
    );
}

#[tokio::test]
async fn hot_titles_is_absent_when_any_page_fails() {
    let server = MockServer::start().await;
    mount_first_page(&server, "rust", listing(&["one"], Some("t3_b"))).await;
    mount_page_after(&server, "rust", "t3_b", ResponseTemplate::new(503)).await;

    assert_eq!(hot_titles(&client_for(&server), "rust").await, None);
}

#[tokio::test]
async fn hot_titles_is_absent_for_unknown_subreddit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/r/nosuchplace/hot.json"))
        .respond_with(
            ResponseTemplate::new(302).append_header("location", "/subreddits/search.json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(hot_titles(&client_for(&server), "nosuchplace").await, None);
}

#[tokio::test]
async fn invalid_names_never_reach_the_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);

    assert_eq!(number_of_subscribers(&client, "").await, 0);
    assert_eq!(top_ten(&client, "bad/name").await, None);
    assert_eq!(hot_titles(&client, "").await, None);
    assert!(count_words(&client, "with space", &["rust"]).await.is_empty());

    server.verify().await;
}

#[tokio::test]
async fn count_words_tallies_across_pages() {
    let server = MockServer::start().await;
    mount_first_page(&server, "programming", listing(&["a b"], Some("x"))).await;
    mount_page_after(
        &server,
        "programming",
        "x",
        ResponseTemplate::new(200).set_body_json(listing(&["a c"], None)),
    )
    .await;

    let counts = count_words(&client_for(&server), "programming", &["a", "c"]).await;

    let mut out = Vec::new();
    write_word_counts(&mut out, &counts).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "a: 2\nc: 1\n");
}

#[tokio::test]
async fn count_words_omits_unseen_keywords_and_breaks_ties_alphabetically() {
    let server = MockServer::start().await;
    mount_first_page(
        &server,
        "programming",
        listing(
            &[
                "Python vs Java, which first?",
                "Why I left JAVA for python.",
                "Go, go, GO!",
            ],
            None,
        ),
    )
    .await;

    let counts = count_words(
        &client_for(&server),
        "programming",
        &["python", "java", "go", "javascript", "Rust"],
    )
    .await;

    assert_eq!(
        counts,
        vec![
            ("go".to_string(), 3),
            ("java".to_string(), 2),
            ("python".to_string(), 2),
        ]
    );
}

#[tokio::test]
async fn failure_on_second_page_matches_listing_that_ended_after_first() {
    let truncated = MockServer::start().await;
    mount_first_page(&truncated, "rust", listing(&["rust rust", "go"], Some("p2"))).await;
    mount_page_after(&truncated, "rust", "p2", ResponseTemplate::new(500)).await;

    Mock::given(method("GET"))
        .and(path("/r/rust/hot.json"))
        .and(query_param("after", "p3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(&["rust"], None)))
        .expect(0)
        .mount(&truncated)
        .await;

    let single = MockServer::start().await;
    mount_first_page(&single, "rust", listing(&["rust rust", "go"], None)).await;

    let keywords = ["rust", "go"];
    let from_truncated = count_words(&client_for(&truncated), "rust", &keywords).await;
    let from_single = count_words(&client_for(&single), "rust", &keywords).await;

    assert_eq!(from_truncated, from_single);
    assert_eq!(
        from_single,
        vec![("rust".to_string(), 2), ("go".to_string(), 1)]
    );
    truncated.verify().await;
}

#[tokio::test]
async fn malformed_page_stops_the_walk() {
    let server = MockServer::start().await;
    mount_first_page(&server, "rust", listing(&["first"], Some("p2"))).await;
    mount_page_after(
        &server,
        "rust",
        "p2",
        ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"),
    )
    .await;

    let client = client_for(&server);
    let subreddit = SubredditName::parse("rust").unwrap();
    let mut seen = Vec::new();

    let summary = walk_hot_listing(&client, &subreddit, |page| {
        seen.extend(page.titles().map(str::to_owned));
    })
    .await;

    assert_eq!(seen, vec!["first".to_string()]);
    assert_eq!(summary.pages, 1);
    assert!(matches!(
        summary.stopped_by,
        Some(FetchHotPageError::DeserializeResponseBody { .. })
    ));
}

#[tokio::test]
async fn top_ten_requests_ten_and_sends_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/r/rust/hot.json"))
        .and(query_param("limit", "10"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(listing(&["first", "second"], Some("t3_z"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let titles = top_ten(&client_for(&server), "rust").await;

    assert_eq!(titles, Some(vec!["first".to_string(), "second".to_string()]));
}

#[tokio::test]
async fn subscribers_reads_count_or_falls_back_to_zero() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/r/programming/about.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"kind": "t5", "data": {"subscribers": 756024}})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/r/this_is_a_fake_subreddit/about.json"))
        .respond_with(ResponseTemplate::new(302).append_header("location", "/subreddits/search"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/r/broken/about.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    assert_eq!(number_of_subscribers(&client, "programming").await, 756024);
    assert_eq!(number_of_subscribers(&client, "this_is_a_fake_subreddit").await, 0);
    assert_eq!(number_of_subscribers(&client, "broken").await, 0);
}

#[tokio::test]
async fn transport_failure_collapses_to_defaults() {
    // Nothing listens on port 1.
    let client = RedditClient::new(
        "http://127.0.0.1:1",
        USER_AGENT,
        Some(std::time::Duration::from_secs(5)),
    )
    .unwrap();

    assert_eq!(number_of_subscribers(&client, "rust").await, 0);
    assert_eq!(top_ten(&client, "rust").await, None);
    assert_eq!(hot_titles(&client, "rust").await, None);
    assert!(count_words(&client, "rust", &["rust"]).await.is_empty());
}
