// Integration tests for URI template expansion

use hyperuri::{build, Bindings, UriTemplate, Value};
use std::collections::BTreeMap;

#[test]
fn test_template_without_expressions_is_unchanged() {
    let templates = [
        "",
        "http://host/v1/poi",
        "http://host/v1/poi?lang=en&limit=10",
        "http://host/{}/x",
        "http://host/{unterminated",
        "http://host/closing}only",
    ];

    for template in templates {
        let bindings = Bindings::new().with("unterminated", "x").with("lang", "pt");
        assert_eq!(build(template, bindings), template);
    }
}

#[test]
fn test_unbound_expressions_leave_no_separator() {
    for op in ["", "+", "#", ".", "/", ";", "?", "&"] {
        let template = format!("http://host/poi{{{}a,b*,c:3}}", op);
        assert_eq!(
            build(&template, Bindings::new()),
            "http://host/poi",
            "operator '{}'",
            op
        );
    }
}

#[test]
fn test_binding_twice_matches_binding_once() {
    let template = UriTemplate::new("/search{?q,tag}");

    let once = Bindings::new().with("q", "fado").with("tag", "music");
    let twice = Bindings::new()
        .with("q", "fado")
        .with("tag", "music")
        .with("q", "other")
        .with("tag", vec!["x", "y"]);

    assert_eq!(template.build(once), template.build(twice));
}

#[test]
fn test_build_is_deterministic() {
    let template = UriTemplate::new("/poi{/id}{?category*,keys*}{&page}");
    let bindings = || {
        Bindings::new()
            .with("id", "42")
            .with("category", vec!["Museum", "Garden"])
            .with("keys", Value::mapping([("lat", "38.7"), ("lon", "-9.1")]))
            .with("page", 2)
    };

    let first = template.build(bindings());
    let second = template.build(bindings());
    assert_eq!(first, second);
    assert_eq!(
        first,
        "/poi/42?category=Museum&category=Garden&lat=38.7&lon=-9.1&page=2"
    );
}

#[test]
fn test_named_and_unnamed_operators() {
    let bindings = || Bindings::new().with("category", "music");
    assert_eq!(build("{?category}", bindings()), "?category=music");
    assert_eq!(build("{category}", bindings()), "music");
}

#[test]
fn test_sequence_explode() {
    let bindings = Bindings::new().with("list", vec!["a", "b"]);
    assert_eq!(build("{/list*}", bindings), "/a/b");
}

#[test]
fn test_prefix_truncation() {
    let bindings = Bindings::new().with("tag", "rockstar");
    assert_eq!(build("{tag:3}", bindings), "roc");
}

#[test]
fn test_mapping_explode() {
    let mut map = BTreeMap::new();
    map.insert("x", "1");
    map.insert("y", "2");
    let bindings = Bindings::new().with("map", map);
    assert_eq!(build("{&map*}", bindings), "&x=1&y=2");
}

#[test]
fn test_space_is_percent_encoded() {
    let bindings = Bindings::new().with("name", "New York");
    assert_eq!(build("{name}", bindings), "New%20York");
}

#[test]
fn test_poi_search_scenario() {
    let template = UriTemplate::new("http://host/v1/poi/search{?category*,tag:2,show}");
    let bindings = Bindings::new()
        .with("category", vec!["Museum", "Garden"])
        .with("tag", "culture");

    assert_eq!(
        template.build(bindings),
        "http://host/v1/poi/search?category=Museum&category=Garden&tag=cu"
    );
}

#[test]
fn test_operator_grid() {
    let bindings = || {
        Bindings::new()
            .with("var", "value")
            .with("x", 1024)
            .with("y", 768)
            .with("list", vec!["red", "green"])
            .with("keys", Value::mapping([("a", "1"), ("b", "2")]))
    };

    let cases = [
        ("{var}", "value"),
        ("{x,y}", "1024,768"),
        ("{+x,y}", "1024,768"),
        ("{#x,y}", "#1024,768"),
        ("{.x,y}", ".1024.768"),
        ("{/var,x}", "/value/1024"),
        ("{;x,y}", ";x=1024;y=768"),
        ("{?x,y}", "?x=1024&y=768"),
        ("{&x,y}", "&x=1024&y=768"),
        ("{list}", "red,green"),
        ("{list*}", "red,green"),
        ("{;list}", ";list=red,green"),
        ("{;list*}", ";list=red;list=green"),
        ("{keys}", "a,1,b,2"),
        ("{keys*}", "a=1,b=2"),
        ("{?keys}", "?keys=a,1,b,2"),
        ("{.keys*}", ".a=1.b=2"),
        ("{var:3}", "val"),
        ("{?var:2}", "?var=va"),
    ];

    for (template, expected) in cases {
        assert_eq!(build(template, bindings()), expected, "template {}", template);
    }
}

#[test]
fn test_unknown_operator_falls_back_to_default() {
    // `!` is not an operator, so `!var` is read as a variable name
    let bindings = Bindings::new().with("!var", "x").with("var", "y");
    assert_eq!(build("{!var}", bindings), "x");
}

#[test]
fn test_malformed_expression_does_not_block_the_rest() {
    let bindings = Bindings::new().with("tag", "culture").with("q", "fado");
    assert_eq!(build("/a/{tag:zz}{?q}", bindings), "/a/culture?q=fado");
}

#[test]
fn test_template_shared_across_threads() {
    let template = UriTemplate::new("/poi{?name,page}");

    let results: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let template = &template;
                scope.spawn(move || {
                    let bindings = Bindings::new()
                        .with("name", format!("poi {}", i))
                        .with("page", i);
                    template.build(bindings)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for (i, uri) in results.iter().enumerate() {
        assert_eq!(uri, &format!("/poi?name=poi%20{}&page={}", i, i));
    }
}
