use super::*;
use crate::cloud::{Point, PointCloud};
use std::path::PathBuf;

/// Write `contents` to a uniquely named file in the system temp directory
fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pointcloud-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

fn missing_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pointcloud-{}-missing-{}", std::process::id(), name))
}

// ========================================================================
// Plain format
// ========================================================================

#[test]
fn test_parse_plain_lines() {
    let cloud = parse_plain("0.25 0.5 3\n0.1 0.9 0\n", "mem").unwrap();

    assert_eq!(cloud.len(), 2);
    assert_eq!(cloud.points()[0], Point::new(0.25, 0.5, 3));
    assert_eq!(cloud.points()[1], Point::new(0.1, 0.9, 0));
}

#[test]
fn test_parse_plain_tolerates_extra_whitespace() {
    let cloud = parse_plain("  0.5\t0.5   1  \n0.2 0.2 2\n", "mem").unwrap();
    assert_eq!(cloud.len(), 2);
    assert_eq!(cloud.points()[1].cluster, 2);
}

#[test]
fn test_parse_plain_blank_line_is_format_error() {
    for text in ["0.1 0.2 0\n\n0.3 0.4 1\n", "0.1 0.2 0\n   \n0.3 0.4 1\n"] {
        let err = parse_plain(text, "mem").unwrap_err();

        assert!(err.is_format());
        assert!(err.to_string().contains("line 2"), "Message was {}", err);
        assert!(err.to_string().contains("found 0"), "Message was {}", err);
    }
}

#[test]
fn test_parse_plain_huge_cluster_index() {
    let cloud = parse_plain("0.1 0.2 10000000000\n0.3 0.4 4294967296\n", "mem").unwrap();

    assert_eq!(cloud.points()[0].cluster, 10_000_000_000);
    assert_eq!(cloud.points()[1].cluster, 4_294_967_296);
    assert_eq!(crate::color_for(cloud.points()[0].cluster), crate::Color::Blue);
}

#[test]
fn test_parse_plain_two_tokens_is_format_error() {
    let err = parse_plain("0.1 0.2 0\n0.3 0.4\n", "points.txt").unwrap_err();

    assert!(err.is_format());
    let message = err.to_string();
    assert!(message.contains("points.txt"));
    assert!(message.contains("line 2"));
    assert!(message.contains("found 2"));
}

#[test]
fn test_parse_plain_rejects_bad_tokens() {
    let cases = vec![
        ("abc 0.2 0", "x coordinate"),
        ("0.1 zz 0", "y coordinate"),
        ("0.1 0.2 one", "cluster index"),
        ("0.1 0.2 -1", "cluster index"),
        ("0.1 0.2 1.5", "cluster index"),
        ("NaN 0.2 0", "x coordinate"),
        ("0.1 0.2 0 9", "found 4"),
    ];

    for (line, expected) in cases {
        let err = parse_plain(line, "mem").unwrap_err();
        assert!(err.is_format(), "Expected format error for {:?}", line);
        assert!(
            err.to_string().contains(expected),
            "Message for {:?} was {}",
            line,
            err
        );
    }
}

#[test]
fn test_plain_round_trip_preserves_points() {
    let original: PointCloud = vec![
        Point::new(0.123456789012345, 0.987654321098765, 0),
        Point::new(1.0 / 3.0, 2.0 / 3.0, 4),
        Point::new(0.0, 0.5, 12),
        Point::new(1e-9, 0.999999999999, 1),
    ]
    .into();

    let mut buffer = Vec::new();
    write_plain(&original, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    assert_eq!(text.lines().count(), 4);

    let reloaded = parse_plain(&text, "mem").unwrap();
    assert_eq!(reloaded, original);
}

#[test]
fn test_save_and_load_plain_file() {
    let path = missing_path("roundtrip.txt");
    let original: PointCloud =
        vec![Point::new(0.5, 0.25, 2), Point::new(0.75, 0.125, 0)].into();

    save_plain(&original, &path).unwrap();
    let reloaded = load_plain(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(reloaded, original);
}

#[test]
fn test_load_plain_missing_file_is_io_error() {
    let err = load_plain(missing_path("nope.txt")).unwrap_err();
    assert!(err.is_io());
    assert!(!err.is_format());
}

#[test]
fn test_save_plain_to_missing_directory_is_io_error() {
    let path = missing_path("dir").join("points.txt");
    let err = save_plain(&PointCloud::new(), &path).unwrap_err();
    assert!(err.is_io());
}

// ========================================================================
// Collection format
// ========================================================================

#[test]
fn test_parse_collection_records() {
    let text = "{\"Key\": \"3\", \"Value\": \"0.25 0.75\"}\n{\"Key\":\"0\",\"Value\":\"0.5  0.5\"}\n";
    let cloud = parse_collection(text, "mem").unwrap();

    assert_eq!(cloud.len(), 2);
    assert_eq!(cloud.points()[0], Point::new(0.25, 0.75, 3));
    assert_eq!(cloud.points()[1], Point::new(0.5, 0.5, 0));
}

#[test]
fn test_parse_collection_blank_line_is_format_error() {
    let text = concat!(
        "{\"Key\": \"0\", \"Value\": \"0.1 0.1\"}\n",
        "   \n",
        "{\"Key\": \"1\", \"Value\": \"0.2 0.2\"}\n",
    );
    let err = parse_collection(text, "part-1").unwrap_err();

    assert!(err.is_format());
    assert!(err.to_string().contains("line 2"), "Message was {}", err);
    assert!(err.to_string().contains("invalid record"), "Message was {}", err);
}

#[test]
fn test_parse_collection_huge_cluster_key() {
    let cloud =
        parse_collection("{\"Key\": \"10000000000\", \"Value\": \"0.5 0.5\"}\n", "mem").unwrap();

    assert_eq!(cloud.points()[0].cluster, 10_000_000_000);
    assert_eq!(crate::color_for(cloud.points()[0].cluster), crate::Color::Blue);
}

#[test]
fn test_parse_collection_single_value_token_is_format_error() {
    let err = parse_collection("{\"Key\": \"1\", \"Value\": \"1.0\"}", "part-0").unwrap_err();

    assert!(err.is_format());
    assert!(err.to_string().contains("expected 2 coordinates"));
    assert!(err.to_string().contains("part-0"));
}

#[test]
fn test_parse_collection_rejects_malformed_records() {
    let cases = vec![
        ("{\"Value\": \"0.1 0.2\"}", "Key"),
        ("{\"Key\": \"1\"}", "Value"),
        ("not json", "invalid record"),
        ("{\"Key\": \"x\", \"Value\": \"0.1 0.2\"}", "cluster index"),
        ("{\"Key\": \"1\", \"Value\": \"0.1 0.2 0.3\"}", "found 3"),
        ("{\"Key\": \"1\", \"Value\": \"0.1 b\"}", "y coordinate"),
    ];

    for (line, expected) in cases {
        let err = parse_collection(line, "mem").unwrap_err();
        assert!(err.is_format(), "Expected format error for {}", line);
        assert!(
            err.to_string().contains(expected),
            "Message for {} was {}",
            line,
            err
        );
    }
}

#[test]
fn test_load_collection_concatenates_in_argument_order() {
    let a = temp_file(
        "collect-a.json",
        "{\"Key\": \"0\", \"Value\": \"0.1 0.1\"}\n{\"Key\": \"0\", \"Value\": \"0.2 0.2\"}\n",
    );
    let b = temp_file(
        "collect-b.json",
        concat!(
            "{\"Key\": \"1\", \"Value\": \"0.3 0.3\"}\n",
            "{\"Key\": \"1\", \"Value\": \"0.4 0.4\"}\n",
            "{\"Key\": \"2\", \"Value\": \"0.5 0.5\"}\n",
        ),
    );

    let cloud = load_collection(&[&a, &b]).unwrap();
    std::fs::remove_file(&a).unwrap();
    std::fs::remove_file(&b).unwrap();

    assert_eq!(cloud.len(), 5);
    let xs: Vec<f64> = cloud.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.1, 0.2, 0.3, 0.4, 0.5]);
    let clusters: Vec<u64> = cloud.iter().map(|p| p.cluster).collect();
    assert_eq!(clusters, vec![0, 0, 1, 1, 2]);
}

#[test]
fn test_load_collection_missing_file_is_io_error() {
    let a = temp_file("collect-present.json", "{\"Key\": \"0\", \"Value\": \"0.1 0.1\"}\n");
    let err = load_collection(&[a.clone(), missing_path("collect.json")]).unwrap_err();
    std::fs::remove_file(&a).unwrap();

    assert!(err.is_io());
}

#[test]
fn test_load_collection_no_files_is_empty() {
    let paths: Vec<PathBuf> = Vec::new();
    assert!(load_collection(&paths).unwrap().is_empty());
}

#[test]
fn test_generated_cloud_survives_plain_file() {
    use crate::generator::{GeneratorConfig, generate_seeded};

    let cloud = generate_seeded(&GeneratorConfig::new(3, 40, 60), Some(8)).unwrap();
    let path = missing_path("generated.txt");

    save_plain(&cloud, &path).unwrap();
    let reloaded = load_plain(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(reloaded, cloud);
}
