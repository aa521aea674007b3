use canonical::{normalize, split_synonyms};
use std::env;

fn main() {
    let input = env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let input = if input.is_empty() {
        "Ecel, Mevt, Vefât".to_string()
    } else {
        input
    };

    let normalized = normalize(&input);
    println!("input:      {input}");
    println!("normalized: {normalized}");
    println!();
    for (i, synonym) in split_synonyms(&normalized).into_iter().enumerate() {
        println!("synonym {i}: '{synonym}'");
    }
}
