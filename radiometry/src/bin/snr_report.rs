//! Pixel SNR report for an electro-optical sensor operating point.
//!
//! Evaluates the radiometric pipeline for a single parameter set and
//! prints the full breakdown: derived geometry, signal chain, per-source
//! noise budget, and the combined SNR. Optionally sweeps exposure time
//! and writes the SNR curve to CSV.
//!
//! Usage:
//! ```
//! cargo run --bin snr_report -- [OPTIONS]
//! ```
//!
//! All parameters default to the RGB reference configuration; see --help.

use std::fs::File;
use std::io::Write;

use anyhow::Result;
use clap::Parser;
use radiometry::params::models;
use radiometry::sweep::{linspace, sweep};
use radiometry::{compute, RawParameters, SnrReport};

/// Parse a sweep range in the format "start,end,steps"
fn parse_sweep_range(s: &str) -> Result<(f64, f64, usize), String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err("Sweep range must be in format 'start,end,steps'".to_string());
    }

    let start = parts[0]
        .trim()
        .parse::<f64>()
        .map_err(|_| "Invalid sweep start value".to_string())?;
    let end = parts[1]
        .trim()
        .parse::<f64>()
        .map_err(|_| "Invalid sweep end value".to_string())?;
    let steps = parts[2]
        .trim()
        .parse::<usize>()
        .map_err(|_| "Invalid sweep step count".to_string())?;

    Ok((start, end, steps))
}

/// Command line arguments for the SNR report
#[derive(Parser, Debug)]
#[command(
    name = "SNR Report",
    about = "Computes single-pixel SNR for an electro-optical imaging sensor",
    long_about = None
)]
struct Args {
    /// Slant range to the scene in kilometers
    #[arg(long, default_value_t = 400.0)]
    range_km: f64,

    /// Center wavelength in nanometers
    #[arg(long, default_value_t = 625.0)]
    wavelength_nm: f64,

    /// Aperture diameter in millimeters
    #[arg(long, default_value_t = 11.4)]
    aperture_mm: f64,

    /// Central obscuration diameter in millimeters
    #[arg(long, default_value_t = 0.0)]
    obscuration_mm: f64,

    /// Detector width in pixels
    #[arg(long, default_value_t = 2200)]
    pixels_x: u32,

    /// Detector height in pixels
    #[arg(long, default_value_t = 3208)]
    pixels_y: u32,

    /// Pixel pitch in micrometers
    #[arg(long, default_value_t = 6.0)]
    pitch_um: f64,

    /// Focal length in millimeters
    #[arg(long, default_value_t = 16.0)]
    focal_length_mm: f64,

    /// Spectral bandwidth in nanometers
    #[arg(long, default_value_t = 300.0)]
    bandwidth_nm: f64,

    /// Scene spectral radiance in W/(sr·m²·µm)
    #[arg(long, default_value_t = 20.45)]
    radiance: f64,

    /// Quantum efficiency (0, 1]
    #[arg(long, default_value_t = 0.35)]
    qe: f64,

    /// Exposure time in seconds
    #[arg(long, default_value_t = 1.3e-4)]
    exposure: f64,

    /// Full-well capacity in electrons
    #[arg(long, default_value_t = 12000.0)]
    well_capacity: f64,

    /// Dynamic range in dB
    #[arg(long, default_value_t = 55.0)]
    dynamic_range_db: f64,

    /// Atmospheric absorption loss fraction
    #[arg(long, default_value_t = 0.11)]
    absorption_loss: f64,

    /// Atmospheric scatter loss fraction
    #[arg(long, default_value_t = 0.058)]
    scatter_loss: f64,

    /// Optical train loss fraction
    #[arg(long, default_value_t = 0.2)]
    optical_loss: f64,

    /// Crop/vignetting loss fraction
    #[arg(long, default_value_t = 0.6)]
    crop_loss: f64,

    /// Use the panchromatic reference preset instead of flag values
    #[arg(long, default_value_t = false)]
    pan_preset: bool,

    /// Emit the full report as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Sweep exposure time and write SNR vs exposure CSV (format: "start,end,steps")
    #[arg(long, value_parser = parse_sweep_range)]
    sweep_exposure: Option<(f64, f64, usize)>,

    /// Output CSV file path for the exposure sweep
    #[arg(long, default_value = "snr_vs_exposure.csv")]
    sweep_csv: String,
}

impl Args {
    fn to_parameters(&self) -> RawParameters {
        if self.pan_preset {
            return models::PAN_REFERENCE.clone();
        }
        RawParameters {
            range_km: self.range_km,
            wavelength_nm: self.wavelength_nm,
            aperture_diameter_mm: self.aperture_mm,
            obscuration_diameter_mm: self.obscuration_mm,
            pixels_x: self.pixels_x,
            pixels_y: self.pixels_y,
            pixel_pitch_um: self.pitch_um,
            focal_length_mm: self.focal_length_mm,
            bandwidth_nm: self.bandwidth_nm,
            spectral_radiance: self.radiance,
            quantum_efficiency: self.qe,
            exposure_s: self.exposure,
            well_capacity_e: self.well_capacity,
            dynamic_range_db: self.dynamic_range_db,
            absorption_loss: self.absorption_loss,
            scatter_loss: self.scatter_loss,
            optical_loss: self.optical_loss,
            crop_loss: self.crop_loss,
        }
    }
}

fn print_report(report: &SnrReport) {
    println!("Geometry");
    println!("  aperture area       {:.4e} m²", report.geometry.aperture_area_m2);
    println!("  obscuration area    {:.4e} m²", report.geometry.obscuration_area_m2);
    println!("  detector area       {:.4e} m²", report.geometry.detector_area_m2);
    println!("  pixel iFOV          {:.4}°", report.geometry.pixel_ifov_deg);
    println!("  ground smear        {:.3} m", report.geometry.ground_smear_m);
    println!();
    println!("Signal");
    println!("  collected power     {:.4e} W", report.signal.collected_power_w);
    println!("  total photon rate   {:.4e} /s", report.signal.total_photon_rate);
    println!("  pixel photon rate   {:.4e} /s", report.signal.pixel_photon_rate);
    println!("  electrons           {:.1} e⁻", report.signal.electrons);
    println!(
        "  well saturation     {:.1}%",
        report.signal.saturation_fraction * 100.0
    );
    println!();
    println!("Noise budget (e⁻)");
    println!("  shot                {:.2}", report.noise.shot_e);
    println!("  dark current        {:.4}", report.noise.dark_e);
    println!("  quantization        {:.2}", report.noise.quantization_e);
    println!("  fixed pattern       {:.3}", report.noise.fixed_pattern_e);
    println!("  readout             {:.2}", report.noise.readout_e);
    let (dominant, magnitude) = report.noise.dominant();
    println!("  dominant source     {dominant} ({magnitude:.2} e⁻)");
    println!();
    println!(
        "SNR                   {:.2} ({:.2} dB)",
        report.snr.linear, report.snr.db
    );

    if report.signal.is_saturated() {
        println!();
        println!("WARNING: pixel saturated; this SNR figure is not meaningful");
    }
}

fn run_exposure_sweep(
    base: &RawParameters,
    range: (f64, f64, usize),
    csv_path: &str,
) -> Result<()> {
    let (start, end, steps) = range;
    let grid = linspace(start, end, steps);
    let results = sweep(base, &grid, |params, t| {
        params.exposure_s = t;
    })?;

    let mut file = File::create(csv_path)?;
    writeln!(file, "exposure_s,electrons,saturation,snr_linear,snr_db")?;
    for (exposure, report) in &results {
        writeln!(
            file,
            "{},{},{},{},{}",
            exposure,
            report.signal.electrons,
            report.signal.saturation_fraction,
            report.snr.linear,
            report.snr.db
        )?;
    }

    println!("Wrote {} sweep points to {}", results.len(), csv_path);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let params = args.to_parameters();

    let report = compute(&params)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if let Some(range) = args.sweep_exposure {
        run_exposure_sweep(&params, range, &args.sweep_csv)?;
    }

    Ok(())
}
