use mapscale_rs::{
    CoordinateLabel, MapScaleError, RulerConfig, clamp_scale, format_metric_pair, metric_to_scale,
    ruler_for_camera,
};

fn main() -> Result<(), MapScaleError> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let lon = 37.6173;
    let lat = 55.7558;
    let config = RulerConfig::default();

    let label = CoordinateLabel::from_coord(&(lon, lat));
    println!("Position: {}", label);

    let (x, y) = format_metric_pair(&(4187541.3, 7509137.8));
    println!("Projected: {} / {}", x, y);

    for metric in [50.0, 5_000.0, 250_000.0, 10_000_000.0] {
        let scale = clamp_scale(metric_to_scale(metric, config.pixels_per_cm));
        match ruler_for_camera(scale, lat, &config) {
            Ok(ruler) => println!("1cm:{} -> {} ({:.2})", metric, ruler.label, ruler.length),
            Err(e) => log::warn!("1cm:{}: {}", metric, e),
        }
    }

    Ok(())
}
