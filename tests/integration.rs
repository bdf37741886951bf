//! End-to-end scenarios: snapshot session → walker → renderers

use bomview::test_utils::{CallEvent, RecordingSession};
use bomview::{
    render_text, ArticleGuard, HtmlRenderer, PlmSession, SnapshotSession, StructureWalker,
    WalkerConfig,
};

const SNAPSHOT: &str = r#"{
    "root": 100,
    "articles": {
        "100": {
            "designation": "ROOT.001",
            "name": "Assembly",
            "rows": [
                { "id": 0, "designation": "ROOT.001-01 ТУ", "name": "Spec", "quantity": "1" },
                { "id": 101, "designation": "ROOT.001-02", "name": "Bracket", "quantity": "4" }
            ]
        },
        "101": {
            "designation": "ROOT.001-02",
            "name": "Bracket",
            "rows": [
                { "id": 102, "designation": "ROOT.001-02-01", "name": "Pin", "quantity": "0 шт", "remark": "поставляется отдельно" }
            ]
        },
        "102": { "designation": "ROOT.001-02-01", "name": "Pin" }
    }
}"#;

fn logged_in_session() -> RecordingSession<SnapshotSession> {
    let mut inner = SnapshotSession::from_json(SNAPSHOT).expect("valid snapshot");
    inner.login().expect("login");
    RecordingSession::new(inner)
}

fn build(include_documentation: bool) -> (bomview::ArticleNode, RecordingSession<SnapshotSession>) {
    let mut session = logged_in_session();
    let root_id = session.selected_article().expect("selection");
    let (designation, name) = {
        let mut article = ArticleGuard::open(&mut session, root_id).expect("open article");
        (
            article.designation().expect("designation"),
            article.name().expect("name"),
        )
    };
    let walker = StructureWalker::new(WalkerConfig {
        include_documentation,
    });
    let tree = walker.walk(&mut session, root_id, designation, name);
    (tree, session)
}

#[test]
fn full_tree_matches_the_catalog() {
    let (tree, _) = build(true);
    assert_eq!(tree.designation, "ROOT.001");
    assert_eq!(tree.name, "Assembly");
    assert_eq!(tree.quantity, "1");

    // Two first-level rows in cursor order; the documentation row (id=0)
    // is a leaf because its id is not positive.
    assert_eq!(tree.children.len(), 2);
    assert_eq!(tree.children[0].designation, "ROOT.001-01 ТУ");
    assert!(tree.children[0].is_leaf());
    assert_eq!(tree.children[1].designation, "ROOT.001-02");

    // The bracket expands into the zero-quantity pin with its remark.
    let bracket = &tree.children[1];
    assert_eq!(bracket.children.len(), 1);
    assert_eq!(bracket.children[0].quantity, "0 шт");
    assert_eq!(
        bracket.children[0].remark.as_deref(),
        Some("поставляется отдельно")
    );
}

#[test]
fn excluding_documentation_drops_only_marked_rows() {
    let (tree, _) = build(false);
    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].designation, "ROOT.001-02");
    assert_eq!(tree.children[0].children.len(), 1);
}

#[test]
fn remark_fetch_happens_exactly_once() {
    let (_, session) = build(true);
    let fetches = session
        .calls()
        .iter()
        .filter(|c| matches!(c, CallEvent::RemarkFetch))
        .count();
    assert_eq!(fetches, 1);
}

#[test]
fn structure_cursors_open_and_close_in_lifo_order() {
    let (_, session) = build(true);
    let mut depth = 0usize;
    let mut max_depth = 0usize;
    let mut opens = 0usize;
    for call in session.calls() {
        match call {
            CallEvent::OpenStructure(id) => {
                assert!(*id > 0, "opened a non-positive id {id}");
                depth += 1;
                opens += 1;
                max_depth = max_depth.max(depth);
            }
            CallEvent::CloseStructure => {
                assert!(depth > 0, "close without open");
                depth -= 1;
            }
            CallEvent::RemarkFetch => {}
        }
    }
    assert_eq!(depth, 0, "all cursors closed at the end");
    assert_eq!(opens, 3, "root, bracket, and pin structures");
    assert_eq!(max_depth, 3);
}

#[test]
fn rendering_the_built_tree_is_deterministic() {
    let (tree, _) = build(true);
    let renderer = HtmlRenderer::default();
    assert_eq!(renderer.render(&tree), renderer.render(&tree));
}

#[test]
fn html_report_contains_the_structure() {
    let (tree, _) = build(false);
    let html = HtmlRenderer::default().render(&tree);
    assert!(html.contains("ROOT.001 - Assembly (Количество: 1)"));
    assert!(html.contains("ROOT.001-02 - Bracket (Количество: 4)"));
    assert!(!html.contains("ROOT.001-01 ТУ"));
    // Remarks are stored but not displayed in the HTML.
    assert!(!html.contains("поставляется отдельно"));
}

#[test]
fn text_listing_mirrors_the_tree() {
    let (tree, _) = build(true);
    let text = render_text(&tree);
    assert!(text.contains("ROOT.001 - Assembly (Количество: 1)"));
    assert!(text.contains("  ROOT.001-01 ТУ - Spec (Количество: 1)"));
    assert!(text.contains("    ROOT.001-02-01 - Pin (Количество: 0 шт) [поставляется отдельно]"));
}

#[test]
fn connect_waits_out_a_slow_client() {
    use std::cell::Cell;
    use std::time::Duration;

    struct CountingClock(Cell<usize>);
    impl bomview::Clock for CountingClock {
        fn sleep(&self, _duration: Duration) {
            self.0.set(self.0.get() + 1);
        }
    }

    let inner = SnapshotSession::from_json(SNAPSHOT).expect("valid snapshot");
    let mut session = RecordingSession::new(inner);
    session.delay_login(2);

    let clock = CountingClock(Cell::new(0));
    bomview::connect(
        &mut session,
        &clock,
        &bomview::CancelToken::new(),
        &bomview::Retry::default(),
    )
    .expect("connect");
    assert_eq!(clock.0.get(), 2);
    assert_eq!(session.selected_article().expect("selection"), 100);
}

#[test]
fn deeply_nested_structures_do_not_overflow() {
    // A 5000-level chain: article N contains article N+1.
    const DEPTH: i64 = 5000;
    let mut articles = serde_json::Map::new();
    for n in 1..=DEPTH {
        let mut record = serde_json::Map::new();
        record.insert("designation".into(), format!("CHAIN.{n:04}").into());
        record.insert("name".into(), "Звено".into());
        if n < DEPTH {
            record.insert(
                "rows".into(),
                serde_json::json!([{
                    "id": n + 1,
                    "designation": format!("CHAIN.{:04}", n + 1),
                    "name": "Звено",
                    "quantity": "1"
                }]),
            );
        }
        articles.insert(n.to_string(), record.into());
    }
    let snapshot = serde_json::json!({ "root": 1, "articles": articles });

    let mut session =
        SnapshotSession::from_json(&snapshot.to_string()).expect("valid snapshot");
    session.login().expect("login");
    let walker = StructureWalker::new(WalkerConfig::default());
    let tree = walker.walk(&mut session, 1, "CHAIN.0001", "Звено");

    let mut depth = 0usize;
    let mut node = &tree;
    while let Some(child) = node.children.first() {
        depth += 1;
        node = child;
    }
    assert_eq!(depth as i64, DEPTH - 1);
}
