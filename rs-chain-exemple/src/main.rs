use std::path::Path;

use log::info;
use rs_chain_core::model::{GenerationConfig, IntChain, StringChain};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let separator = " ";

    // Corpus: first argument, or "example.txt", or the alphabet if none exists
    let corpus_path = std::env::args().nth(1).unwrap_or_else(|| "example.txt".to_owned());
    let schain = if Path::new(&corpus_path).is_file() {
        info!("Loading corpus from {}", corpus_path);
        StringChain::from_corpus_file(&corpus_path, ' ')?
    } else {
        info!("No corpus file found, using the alphabet");
        let mut chain = StringChain::new();
        chain.append_text("a b c d e f g h i j k l m n o p q r s t u v w x y z", ' ');
        chain
    };
    info!("Corpus size: {} words", schain.chain().len());

    // Generation settings, overridable with "rs-chain.json"
    let config = if Path::new("rs-chain.json").is_file() {
        GenerationConfig::from_file("rs-chain.json")?
    } else {
        GenerationConfig { max_len: 8, retries: 10, repeatings: 10, seed: 12398 }
    };

    let v = schain.generate_text("the", "", separator, &config)?;
    println!("[Single word example] {}", v);

    let v = schain.generate_text("the", "fire", separator, &config)?;
    println!("[Two words example] {}", v);

    // Many more retries and repeatings to wander the whole corpus
    let random_config = config
        .with_retries(config.retries.saturating_mul(100))
        .with_repeatings(config.repeatings.saturating_mul(100))
        .with_seed(config.seed.wrapping_mul(10));
    let v = schain.generate_text("", "", separator, &random_config)?;
    println!("[No word example/completely random] {}", v);

    let mut ichain = IntChain::new();
    ichain.append_ints(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    ichain.append_int(11);

    let ic = ichain.generate_int_phrase(1, 2, &config)?;
    println!("[Good numeric sequence] {}", join(&ic));

    // (4, 2) never appears in the corpus: the walk has to teleport
    let ic = ichain.generate_int_phrase(4, 2, &config)?;
    println!("[Bad numeric sequence] {}", join(&ic));

    let ic = ichain.generate_int_phrase_single(5, &config)?;
    println!("[Single number example] {}", join(&ic));

    Ok(())
}

fn join(values: &[i64]) -> String {
    values.iter().map(i64::to_string).collect::<Vec<_>>().join(" ")
}
