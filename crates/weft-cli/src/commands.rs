//! CLI command implementations.

use std::path::Path;

use weft_bench::metrics::BenchmarkMetrics;
use weft_bench::runner::BenchmarkRunner;
use weft_bench::scenarios::{PointerPath, Scenario, ScenarioKind};
use weft_debug::{StateSnapshot, TelemetryHook};
use weft_render::{HeadlessRenderer, RenderFrame, Renderer, SolidPalette};
use weft_sim::{FabricConfig, MultiLayerCoordinator};
use weft_telemetry::{EventBus, TracingSink};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Sub-segments per constraint when building headless frames.
const FRAME_SUBDIVISIONS: usize = 8;

/// Reads and validates a fabric config from TOML.
pub fn load_config(path: &str) -> Result<FabricConfig, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let config: FabricConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Run a headless simulation with the pointer circling the sheet.
pub fn simulate(
    config_path: Option<&str>,
    ticks: u32,
    dt: f32,
    snapshot_path: Option<&str>,
) -> CliResult {
    println!("Weft Simulation");
    println!("───────────────");

    let config = match config_path {
        Some(path) => {
            println!("Config:   {path}");
            load_config(path)?
        }
        None => {
            println!("Config:   defaults");
            FabricConfig::default()
        }
    };
    if !(dt.is_finite() && dt >= 0.0) {
        return Err(format!("dt must be finite and non-negative, got {dt}").into());
    }

    let pointer = PointerPath::sweep_for(&config);
    tracing::info!(ticks, dt, ?pointer, "starting headless simulation");
    let mut fabric = MultiLayerCoordinator::new(config)?;

    println!(
        "Fabric:   {} layers, {} nodes, {} constraints",
        fabric.layer_count(),
        fabric.node_count(),
        fabric.constraint_count()
    );
    println!("Ticks:    {ticks} @ {dt:.4}s");
    println!();

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new()));
    let mut hook = TelemetryHook::new();
    let palette = SolidPalette::default();
    let mut renderer = HeadlessRenderer::new();
    let mut events = 0usize;

    for _ in 0..ticks {
        let p = pointer.position_at(fabric.sim_time());
        fabric.update_with_hook(dt, p, &mut hook);
        hook.forward_to(&bus);
        events += bus.flush();

        let frame = RenderFrame::capture(&fabric, &palette, FRAME_SUBDIVISIONS);
        renderer.submit_frame(&frame)?;
    }
    renderer.finalize()?;
    bus.finish();

    let snapshot = StateSnapshot::capture(&fabric);
    let strain = fabric
        .layers()
        .iter()
        .map(|l| l.constraint_set().max_strain(l.nodes()))
        .fold(0.0f32, f32::max);

    println!("Sim time:     {:.3}s", fabric.sim_time());
    println!("Frames:       {} ({} segments)", renderer.frame_count(), renderer.segment_count());
    println!("Events:       {events}");
    println!("Max strain:   {strain:.6e}");
    for layer in &snapshot.layers {
        if let Some([min_x, min_y, max_x, max_y]) = layer.bounds() {
            println!(
                "Layer {}:      x [{min_x:.1}, {max_x:.1}]  y [{min_y:.1}, {max_y:.1}]  max speed {:.3}",
                layer.layer,
                layer.max_speed()
            );
        }
    }

    if let Some(path) = snapshot_path {
        snapshot.write_to(Path::new(path))?;
        println!();
        println!("Snapshot written to: {path}");
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(scenario_name: &str, output_path: Option<&str>) -> CliResult {
    println!("Weft Benchmark Suite");
    println!("════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::from_name(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                eprintln!("Unknown scenario: {scenario_name}");
                eprintln!("Available: {}, all", available.join(", "));
                return Err("Unknown scenario".into());
            }
        }
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind);

        println!(
            "Running: {} ({} layers, {}x{} grid, {} ticks)",
            kind.name(),
            scenario.config.layer_count,
            scenario.config.grid_width,
            scenario.config.grid_height,
            scenario.ticks,
        );

        let metrics = BenchmarkRunner::run(&scenario)
            .map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg tick:      {:.3}ms", metrics.avg_tick_time * 1000.0);
        println!("  Final strain:  {:.6e}", metrics.final_max_strain);
        println!("  Max displace:  {:.2}", metrics.max_displacement);
        println!();

        all_metrics.push(metrics);
    }

    if let Some(path) = output_path {
        let csv = BenchmarkMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", BenchmarkMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Inspect a state snapshot.
pub fn inspect(path: &str) -> CliResult {
    println!("Weft Snapshot Inspector");
    println!("───────────────────────");
    println!();

    let snapshot = StateSnapshot::read_from(Path::new(path))
        .map_err(|e| format!("Failed to read snapshot: {e}"))?;

    println!("Tick:         {}", snapshot.tick);
    println!("Sim time:     {:.4}s", snapshot.sim_time);
    println!("Layers:       {}", snapshot.layers.len());
    println!("Nodes:        {}", snapshot.node_count());

    for layer in &snapshot.layers {
        let pinned = layer.pinned.iter().filter(|&&p| p).count();
        print!(
            "  layer {}: {}x{}, {} pinned, max speed {:.4}",
            layer.layer,
            layer.width,
            layer.height,
            pinned,
            layer.max_speed()
        );
        match layer.bounds() {
            Some([min_x, min_y, max_x, max_y]) => {
                println!("  x [{min_x:.2}, {max_x:.2}]  y [{min_y:.2}, {max_y:.2}]")
            }
            None => println!(),
        }
    }

    Ok(())
}

/// Validate a fabric config.
pub fn validate(path: &str) -> CliResult {
    println!("Weft Validator");
    println!("──────────────");
    println!();

    if !path.ends_with(".toml") {
        return Err(format!("Unsupported file format: {path}. Use .toml (fabric config).").into());
    }

    println!("Validating config: {path}");
    match load_config(path) {
        Ok(config) => println!(
            "✅ Config is valid ({} layers of {}x{} nodes).",
            config.layer_count, config.grid_width, config.grid_height
        ),
        Err(e) => {
            println!("❌ Config validation failed: {e}");
            return Err(e);
        }
    }

    Ok(())
}
