//! scrawl - TUI and CLI for character-grid drawing
//!
//! Usage:
//!   scrawl                       Launch the shape gallery TUI
//!   scrawl demo                  Draw the classic demo scene to stdout
//!   scrawl draw -s <shape>       Draw one shape to stdout (text or JSON)
//!   scrawl figures               Run the value-type demonstration
//!   scrawl shapes                List available shapes
//!   scrawl benchmark             Time the rasterizer on random segments

use std::fs;
use std::io::{self, stdout};
use std::time::{Duration, Instant};

use serde::Serialize;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use rand::Rng;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use scrawl::figures;
use scrawl::geometry::segments_of;
use scrawl::{rasterize, Canvas, CanvasError, Point, ShapeKind};

/// Sidebar width in the TUI layout.
const SIDEBAR_WIDTH: u16 = 22;

/// Marker glyphs the TUI cycles through.
const MARKERS: [char; 5] = ['*', '#', '+', 'o', '@'];

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() >= 2 {
        match args[1].as_str() {
            "demo" => {
                cmd_demo();
                return;
            }
            "draw" => {
                cmd_draw(&args[2..]);
                return;
            }
            "figures" => {
                cmd_figures();
                return;
            }
            "shapes" => {
                cmd_shapes();
                return;
            }
            "benchmark" => {
                cmd_benchmark(&args[2..]);
                return;
            }
            "help" | "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            other => {
                eprintln!("Unknown command: {}", other);
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    // No subcommand: launch the TUI gallery
    if let Err(e) = run_tui() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_usage(prog: &str) {
    eprintln!("scrawl - vector shapes on a character grid");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {}                        Launch the shape gallery TUI", prog);
    eprintln!("  {} demo                   Draw the classic demo scene", prog);
    eprintln!("  {} draw [options]         Draw one shape", prog);
    eprintln!("  {} figures                Run the value-type demonstration", prog);
    eprintln!("  {} shapes                 List available shapes", prog);
    eprintln!("  {} benchmark [-n <count>] Time the rasterizer", prog);
    eprintln!();
    eprintln!("Draw options:");
    eprintln!("  -s, --shape <name>     Shape to draw (default: hexagon)");
    eprintln!("  -W, --width <cols>     Canvas width (default: 60)");
    eprintln!("  -H, --height <rows>    Canvas height (default: 30)");
    eprintln!("  -r, --radius <n>       Shape radius in cells (default: 12)");
    eprintln!("  -a, --angle <deg>      Extra rotation in degrees (default: 0)");
    eprintln!("  -c, --char <glyph>     Marker character (default: *)");
    eprintln!("  -f, --format <fmt>     Output format: text, json (default: text)");
    eprintln!("  -o, --output <file>    Output file (- for stdout, default: stdout)");
    eprintln!();
    eprintln!("TUI Controls:");
    eprintln!("  ↑/↓ or j/k    Select shape");
    eprintln!("  ←/→ or h/l    Adjust focused setting");
    eprintln!("  Tab           Switch between radius/rotation");
    eprintln!("  c             Cycle marker character");
    eprintln!("  q / Esc       Quit");
}

// ============ CLI Commands ============

/// A marked cell in JSON output.
#[derive(Serialize)]
struct JsonCell {
    x: i32,
    y: i32,
    glyph: char,
}

/// JSON output for a drawn canvas.
#[derive(Serialize)]
struct JsonCanvas {
    width: usize,
    height: usize,
    cells: Vec<JsonCell>,
}

/// Draw the original teaching scene: a line, a five-point polygon,
/// a rectangle, and a 20-gon that reads as a circle.
fn demo_scene(canvas: &mut Canvas) -> Result<(), CanvasError> {
    canvas.draw_line(Point::new(10, 4), Point::new(92, 19), '+')?;
    canvas.draw_polygon(
        &[
            Point::new(7, 12),
            Point::new(24, 29),
            Point::new(42, 15),
            Point::new(37, 32),
            Point::new(15, 35),
        ],
        true,
        '*',
    )?;
    canvas.draw_rectangle(Point::new(45, 2), Point::new(80, 27), '#')?;
    canvas.draw_ngon(Point::new(72, 25), 12.0, 20, 80.0, '-')?;
    Ok(())
}

fn cmd_demo() {
    let mut canvas = Canvas::new(100, 40);

    if let Err(e) = demo_scene(&mut canvas) {
        eprintln!("Demo scene failed to draw: {}", e);
        std::process::exit(1);
    }

    for line in canvas.render() {
        println!("{}", line);
    }
}

fn cmd_draw(args: &[String]) {
    let mut shape_name = "hexagon";
    let mut width: usize = 60;
    let mut height: usize = 30;
    let mut radius: f64 = 12.0;
    let mut rotation: f64 = 0.0;
    let mut glyph = '*';
    let mut json = false;
    let mut output_path: Option<&str> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--shape" => {
                i += 1;
                if i < args.len() {
                    shape_name = &args[i];
                }
            }
            "-W" | "--width" => {
                i += 1;
                if i < args.len() {
                    width = args[i].parse().unwrap_or(60);
                }
            }
            "-H" | "--height" => {
                i += 1;
                if i < args.len() {
                    height = args[i].parse().unwrap_or(30);
                }
            }
            "-r" | "--radius" => {
                i += 1;
                if i < args.len() {
                    radius = args[i].parse().unwrap_or(12.0);
                }
            }
            "-a" | "--angle" => {
                i += 1;
                if i < args.len() {
                    rotation = args[i].parse().unwrap_or(0.0);
                }
            }
            "-c" | "--char" => {
                i += 1;
                if i < args.len() {
                    glyph = args[i].chars().next().unwrap_or('*');
                }
            }
            "-f" | "--format" => {
                i += 1;
                if i < args.len() {
                    json = match args[i].to_lowercase().as_str() {
                        "json" => true,
                        "text" => false,
                        other => {
                            eprintln!("Unknown format: {}. Use 'text' or 'json'.", other);
                            std::process::exit(1);
                        }
                    };
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(&args[i]);
                }
            }
            other => {
                eprintln!("Unknown draw option: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let kind = ShapeKind::from_name(shape_name).unwrap_or_else(|| {
        eprintln!(
            "Unknown shape: {}. Use the 'shapes' command to list available shapes.",
            shape_name
        );
        std::process::exit(1);
    });

    let mut canvas = Canvas::new(width, height);
    let center = Point::new(width as i32 / 2, height as i32 / 2);
    let points = kind.vertices(center, radius, rotation);

    if let Err(e) = canvas.draw_polygon(&points, true, glyph) {
        eprintln!("Failed to draw {}: {}", kind.name(), e);
        eprintln!("Try a smaller --radius or a larger canvas.");
        std::process::exit(1);
    }

    let output = if json {
        let cells: Vec<JsonCell> = canvas
            .cells()
            .map(|(p, glyph)| JsonCell { x: p.x, y: p.y, glyph })
            .collect();
        let doc = JsonCanvas { width, height, cells };
        match serde_json::to_string(&doc) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Failed to serialize JSON: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        let mut text = String::new();
        for line in canvas.render() {
            text.push_str(&line);
            text.push('\n');
        }
        text
    };

    match output_path {
        Some("-") | None => {
            print!("{}", output);
            if json {
                println!();
            }
        }
        Some(path) => {
            if let Err(e) = fs::write(path, &output) {
                eprintln!("Failed to write {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Wrote: {}", path);
        }
    }
}

fn cmd_shapes() {
    println!("Available shapes:");
    for kind in ShapeKind::all() {
        println!("  {:10} {:>2} points", kind.name(), kind.point_count());
    }
}

/// Walk through the value-type semantics: display format, centroids,
/// centroid equality, and sorting by distance from the origin.
fn cmd_figures() {
    use figures::{Point, Shape};

    let p1 = Point::new(2.3, 43.14);
    let p2 = Point::new(5.53, 2.5);
    let p3 = Point::new(12.2, 28.7);

    println!("points: {} {} {}", p1, p2, p3);

    let s1 = Shape::new(vec![p1, p2, p3]);
    let s2 = Shape::new(vec![p2]);
    println!("shapes: {} and {}", s1, s2);

    let unit_square = Shape::new(vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 0.0),
    ]);
    let diamond = Shape::new(vec![
        Point::new(0.0, 0.5),
        Point::new(0.5, 1.0),
        Point::new(1.0, 0.5),
        Point::new(0.5, 0.0),
    ]);

    match unit_square.centroid() {
        Ok(centroid) => println!("unit square centroid: {}", centroid),
        Err(e) => println!("unit square centroid: {}", e),
    }

    println!(
        "square == inscribed diamond (same centroid): {}",
        unit_square == diamond
    );

    println!(
        "distance of (1/1) from origin: {}",
        Point::new(1.0, 1.0).distance_from_origin()
    );

    let near = unit_square.clone();
    let mid = Shape::new(vec![
        Point::new(5.0, 5.0),
        Point::new(5.0, 6.0),
        Point::new(6.0, 6.0),
        Point::new(6.0, 5.0),
    ]);
    let far = Shape::new(vec![
        Point::new(10.0, 10.0),
        Point::new(10.0, 11.0),
        Point::new(11.0, 11.0),
        Point::new(11.0, 10.0),
    ]);

    let mut shapes = vec![far, near, mid];
    shapes.sort_by(|a, b| {
        let da = a
            .centroid_distance()
            .expect("demo shapes are non-empty, so they always have a key");
        let db = b
            .centroid_distance()
            .expect("demo shapes are non-empty, so they always have a key");
        da.partial_cmp(&db).expect("distances are finite")
    });

    println!("sorted by centroid distance from origin:");
    for shape in &shapes {
        // Non-empty by construction
        if let Ok(centroid) = shape.centroid() {
            println!(
                "  {} centroid {} distance {:.3}",
                shape,
                centroid,
                centroid.distance_from_origin()
            );
        }
    }
}

fn cmd_benchmark(args: &[String]) {
    let mut count: usize = 100_000;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--count" => {
                i += 1;
                if i < args.len() {
                    count = args[i].parse().unwrap_or(100_000);
                }
            }
            other => {
                eprintln!("Unknown benchmark option: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut rng = rand::rng();
    let segments: Vec<(Point, Point)> = (0..count)
        .map(|_| {
            (
                Point::new(rng.random_range(0..200), rng.random_range(0..80)),
                Point::new(rng.random_range(0..200), rng.random_range(0..80)),
            )
        })
        .collect();

    println!("Rasterizing {} random segments...", count);
    let start = Instant::now();

    let mut total_cells = 0usize;
    for &(a, b) in &segments {
        total_cells += rasterize(a, b).len();
    }

    let elapsed = start.elapsed();

    // Second workload: polygon decomposition over n-gon vertex rings
    let ring: Vec<Point> = scrawl::regular_polygon(Point::new(100, 40), 35.0, 24, 0.0);
    let start_poly = Instant::now();
    let mut total_segments = 0usize;
    for _ in 0..count / 100 {
        total_segments += segments_of(&ring, true).len();
    }
    let poly_elapsed = start_poly.elapsed();

    println!();
    println!("═══════════════════════════════════════════════");
    println!("  SCRAWL BENCHMARK");
    println!("═══════════════════════════════════════════════");
    println!("  Segments rasterized: {}", count);
    println!("  Cells produced: {}", total_cells);
    println!("  Time: {:?}", elapsed);
    println!(
        "  Avg per segment: {:.3}µs",
        elapsed.as_secs_f64() * 1_000_000.0 / count as f64
    );
    println!(
        "  Polygon decompositions: {} ({} segments, {:?})",
        count / 100,
        total_segments,
        poly_elapsed
    );
    println!("═══════════════════════════════════════════════");
}

// ============ TUI ============

/// Application state for the shape gallery TUI.
struct App {
    /// All shapes in the catalog
    shapes: Vec<ShapeKind>,
    /// Current shape selection
    shape_state: ListState,
    /// Shape radius in cells
    radius: f64,
    /// Extra rotation in degrees
    rotation: f64,
    /// Index into MARKERS for the current glyph
    marker_idx: usize,
    /// Rendered preview text (cached)
    preview: String,
    /// Marked-cell count for the stats panel
    cells_marked: usize,
    /// Last generation time
    gen_time_ms: f64,
    /// Which setting is focused (0=radius, 1=rotation)
    setting_focus: usize,
    /// Should exit
    should_quit: bool,
    /// Regenerate the preview on the next tick
    needs_redraw: bool,
}

impl App {
    fn new() -> Self {
        let shapes: Vec<ShapeKind> = ShapeKind::all().to_vec();
        let mut shape_state = ListState::default();
        shape_state.select(Some(0));

        App {
            shapes,
            shape_state,
            radius: 12.0,
            rotation: 0.0,
            marker_idx: 0,
            preview: String::new(),
            cells_marked: 0,
            gen_time_ms: 0.0,
            setting_focus: 0,
            should_quit: false,
            needs_redraw: true,
        }
    }

    fn selected_shape(&self) -> ShapeKind {
        self.shapes[self.shape_state.selected().unwrap_or(0)]
    }

    fn marker(&self) -> char {
        MARKERS[self.marker_idx % MARKERS.len()]
    }

    /// Redraw the preview canvas at the given cell dimensions.
    fn regenerate(&mut self, width: usize, height: usize) {
        let start = Instant::now();

        let mut canvas = Canvas::new(width, height);
        let center = Point::new(width as i32 / 2, height as i32 / 2);

        // Keep the shape inside the preview regardless of the setting
        let max_radius = (width.min(height) as f64 / 2.0 - 1.0).max(1.0);
        let radius = self.radius.min(max_radius);

        let points = self.selected_shape().vertices(center, radius, self.rotation);
        if let Err(e) = canvas.draw_polygon(&points, true, self.marker()) {
            // Rounding can still clip a vertex on tiny terminals
            log::warn!("preview draw failed: {}", e);
        }

        self.cells_marked = canvas.cells().count();
        self.preview = canvas
            .render()
            .collect::<Vec<String>>()
            .join("\n");
        self.gen_time_ms = start.elapsed().as_secs_f64() * 1000.0;
        self.needs_redraw = false;
    }

    fn next_shape(&mut self) {
        let i = match self.shape_state.selected() {
            Some(i) => (i + 1) % self.shapes.len(),
            None => 0,
        };
        self.shape_state.select(Some(i));
        self.needs_redraw = true;
    }

    fn prev_shape(&mut self) {
        let i = match self.shape_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.shapes.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.shape_state.select(Some(i));
        self.needs_redraw = true;
    }

    fn adjust_setting(&mut self, delta: f64) {
        match self.setting_focus {
            0 => {
                self.radius = (self.radius + delta).clamp(1.0, 100.0);
            }
            1 => {
                self.rotation = (self.rotation + delta * 5.0) % 360.0;
                if self.rotation < 0.0 {
                    self.rotation += 360.0;
                }
            }
            _ => {}
        }
        self.needs_redraw = true;
    }

    fn cycle_marker(&mut self) {
        self.marker_idx = (self.marker_idx + 1) % MARKERS.len();
        self.needs_redraw = true;
    }
}

fn run_tui() -> Result<(), String> {
    enable_raw_mode().map_err(|e| e.to_string())?;
    stdout()
        .execute(EnterAlternateScreen)
        .map_err(|e| e.to_string())?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout())).map_err(|e| e.to_string())?;

    let mut app = App::new();
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode().map_err(|e| e.to_string())?;
    stdout()
        .execute(LeaveAlternateScreen)
        .map_err(|e| e.to_string())?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    loop {
        if app.needs_redraw {
            // Preview area: whole terminal minus sidebar, settings row,
            // borders, and the canvas ruler decorations
            let size = terminal.size().map_err(|e| e.to_string())?;
            let width = size.width.saturating_sub(SIDEBAR_WIDTH + 4).max(10) as usize;
            let height = size.height.saturating_sub(5 + 4).max(5) as usize;
            app.regenerate(width, height);
        }

        terminal
            .draw(|frame| ui(frame, app))
            .map_err(|_| "Draw error".to_string())?;

        if event::poll(Duration::from_millis(50)).map_err(|e| e.to_string())? {
            match event::read().map_err(|e| e.to_string())? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        app.prev_shape();
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        app.next_shape();
                    }
                    KeyCode::Tab => {
                        app.setting_focus = (app.setting_focus + 1) % 2;
                    }
                    KeyCode::Left | KeyCode::Char('h') => {
                        app.adjust_setting(-1.0);
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        app.adjust_setting(1.0);
                    }
                    KeyCode::Char('c') => {
                        app.cycle_marker();
                    }
                    _ => {}
                },
                Event::Resize(_, _) => {
                    app.needs_redraw = true;
                }
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &mut App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(5)])
        .split(frame.area());

    let top_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
        .split(main_layout[0]);

    let sidebar_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(7)])
        .split(top_layout[0]);

    // Shape list
    let items: Vec<ListItem> = app
        .shapes
        .iter()
        .map(|kind| ListItem::new(kind.name()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Shapes ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    frame.render_stateful_widget(list, sidebar_layout[0], &mut app.shape_state.clone());

    // Stats panel
    let stats_text = format!(
        "Cells: {}\nMarker: {}\nGen: {:.2}ms",
        app.cells_marked,
        app.marker(),
        app.gen_time_ms
    );
    let stats = Paragraph::new(stats_text)
        .block(
            Block::default()
                .title(" Stats ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(stats, sidebar_layout[1]);

    // Canvas preview
    let preview_block = Block::default()
        .title(format!(" {} ", app.selected_shape().name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let preview = Paragraph::new(app.preview.clone())
        .style(Style::default().fg(Color::White))
        .block(preview_block);

    frame.render_widget(preview, top_layout[1]);

    // Settings panel
    let settings_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
        ])
        .split(main_layout[1]);

    let radius_style = if app.setting_focus == 0 {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let rotation_style = if app.setting_focus == 1 {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let radius_text = Paragraph::new(format!("{:.0}", app.radius))
        .style(radius_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Radius ")
                .borders(Borders::ALL)
                .border_style(radius_style),
        );

    frame.render_widget(radius_text, settings_layout[0]);

    let rotation_text = Paragraph::new(format!("{:.0}°", app.rotation))
        .style(rotation_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Rotation ")
                .borders(Borders::ALL)
                .border_style(rotation_style),
        );

    frame.render_widget(rotation_text, settings_layout[1]);

    let help = Paragraph::new("↑↓ shape  ←→ adjust\nTab switch  c marker\nq quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, settings_layout[2]);
}
