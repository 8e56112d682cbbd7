use orchid_judge::parse_tag;

fn main() {
    let text = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: parse_tag <tag text>   (falling back to a demo tag)");
        "Laelia × purpurata (Snow Queen)".to_string()
    });

    let identity = parse_tag(&text, 0.9);
    println!("genus:           {}", identity.genus);
    println!("species-or-grex: {}", identity.species_or_grex);
    println!("clone:           {}", identity.clone_name);
    println!("hybrid:          {}", identity.is_hybrid);
}
