use orchid_judge::judge;
use orchid_judge::{MetricsParams, ScoringRaw, ScoringWeights};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    orchid_judge::core::init_with_level(log::LevelFilter::Debug)?;

    // Synthetic "plant photo": a bright bloom on a dark background. A real
    // caller would decode a capture here instead.
    let mut img = image::RgbaImage::from_pixel(160, 160, image::Rgba([20, 30, 20, 255]));
    for y in 40..120 {
        for x in 55..105 {
            img.put_pixel(x, y, image::Rgba([235, 210, 240, 255]));
        }
    }

    let entry = judge::judge_image(
        &img,
        &MetricsParams::default(),
        "Cattleya labiata \"Fire Dragon\"\nSpring Show",
        0.88,
        ScoringRaw {
            form: 8,
            color: 9,
            size: 6,
            floriferousness: 7,
            condition: 8,
            distinctiveness: 7,
        },
        ScoringWeights::default(),
    );

    println!("{}", serde_json::to_string_pretty(&entry)?);
    println!(
        "{} {} -> {:.2}: {}",
        entry.tag.genus, entry.tag.species_or_grex, entry.weighted_total, entry.band
    );

    Ok(())
}
