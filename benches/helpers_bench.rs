//! Quick benchmark for the hot helpers (URL check, list join, JSON encode)

use nlu_utils::{build_entity, is_url, json_to_string, list_to_str, JsonOptions};
use std::hint::black_box;
use std::time::Instant;

fn main() {
    let resources = vec![
        "https://example.com/models/nlu.tar.gz",
        "file:///tmp/model",
        "models/nlu-20260101.tar.gz",
        "",
    ];

    println!("URL Detection Performance Test");
    println!("==============================\n");

    // Warm up the lazy regex
    for resource in &resources {
        let _ = is_url(resource);
    }

    for resource in &resources {
        let iterations = 1_000_000;
        let start = Instant::now();

        for _ in 0..iterations {
            black_box(is_url(black_box(resource)));
        }

        let elapsed = start.elapsed();
        println!("Resource: {:50}", format!("\"{}\"", resource));
        println!("  Time for {} iterations: {:?}", iterations, elapsed);
        println!("  Per operation: {:?}\n", elapsed / iterations);
    }

    println!("List Join / JSON Encode");
    println!("=======================\n");

    let intents = vec!["greet", "goodbye", "affirm", "deny", "mood_great", "bot_challenge"];
    let iterations = 200_000;

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(list_to_str(black_box(&intents)));
    }
    println!("  list_to_str x {}: {:?}", iterations, start.elapsed());

    let entity = build_entity(
        7,
        13,
        "Berlin",
        "city",
        Some("destination"),
        None,
        Vec::<(String, serde_json::Value)>::new(),
    );
    for (label, options) in [
        ("pretty", JsonOptions::default()),
        ("compact+ascii", JsonOptions::compact().with_ensure_ascii(true)),
    ] {
        let start = Instant::now();
        for _ in 0..iterations {
            let _ = black_box(json_to_string(black_box(&entity), &options));
        }
        println!("  json_to_string ({}) x {}: {:?}", label, iterations, start.elapsed());
    }
}
