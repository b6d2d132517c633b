use std::{
    fs::File,
    io,
    io::prelude::*,
    path::Path,
};

use docopt::Docopt;
use gridmazes::{
    errors::*,
    grid_traits::MazeGrid,
    hexgrid::HexGrid,
    maze::Maze,
    rectgrid::RectGrid,
    renderers::{self, HexLayout, RectLayout, RenderOptions},
    units::{Height, HexPixelSize, PixelHeight, PixelWidth, Radius, Width},
};
use log::{info, warn};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;

const USAGE: &str = "Grid Mazes

Usage:
    maze_driver -h | --help
    maze_driver rect [--width=<w> --height=<h>] [options]
    maze_driver hex [--radius=<n>] [options]

Options:
    -h --help              Show this screen.
    --width=<w>            The width of a w*h rectangular grid [default: 16].
    --height=<h>           The height of a w*h rectangular grid [default: 16].
    --radius=<n>           Rings of hexagons around the centre of a hexagonal grid [default: 5].
    --seed=<n>             Seed for the random number generator. Drawn at random and logged if not given.
    --image-out=<path>     Output file path for an image rendering of a maze. Always PNG format.
    --image-width=<px>     Width of the image rendering in pixels [default: 800].
    --image-height=<px>    Height of the image rendering in pixels [default: 800].
    --hex-size=<px>        Centre to corner pixel size of each hexagon in an image rendering [default: 40].
    --text                 Print a textual rendering of a rectangular maze.
    --text-out=<path>      Output file path for a textual rendering of a rectangular maze.
    --verify               Check the generated maze is perfect, failing if it is not.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_rect: bool,
    cmd_hex: bool,
    flag_width: usize,
    flag_height: usize,
    flag_radius: usize,
    flag_seed: Option<u64>,
    flag_image_out: String,
    flag_image_width: u32,
    flag_image_height: u32,
    flag_hex_size: f64,
    flag_text: bool,
    flag_text_out: String,
    flag_verify: bool,
}

fn main() -> Result<()> {

    env_logger::init();
    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("maze seed {}", seed);
    let mut rng = XorShiftRng::seed_from_u64(seed);

    let output_file = if args.flag_image_out.is_empty() {
        None
    } else {
        Some(Path::new(&args.flag_image_out))
    };
    let render_options = renderers::RenderOptionsBuilder::new()
        .surface_width(PixelWidth(args.flag_image_width))
        .surface_height(PixelHeight(args.flag_image_height))
        .hex_size(HexPixelSize(args.flag_hex_size))
        .output_file(output_file)
        .build();

    if args.cmd_rect {
        let grid = RectGrid::new(Width(args.flag_width), Height(args.flag_height))
            .chain_err(|| "failed to build the rectangular grid")?;
        let maze = Maze::generate(grid, &mut rng)?;
        report_maze(&maze, args.flag_verify)?;

        let layout = RectLayout::new(maze.grid(),
                                     render_options.surface_width,
                                     render_options.surface_height);
        render_image(&maze, &layout, &render_options)?;

        if !args.flag_text_out.is_empty() {
            write_text_to_file(&maze.grid().to_string(), &args.flag_text_out)
                .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
        }
        // Show the maze somewhere if nothing else was asked for.
        let no_output_chosen = render_options.output_file.is_none() && args.flag_text_out.is_empty();
        if args.flag_text || no_output_chosen {
            println!("{}", maze.grid());
        }
    } else if args.cmd_hex {
        let grid = HexGrid::new(Radius(args.flag_radius))
            .chain_err(|| "failed to build the hexagonal grid")?;
        let maze = Maze::generate(grid, &mut rng)?;
        report_maze(&maze, args.flag_verify)?;

        let layout = HexLayout::new(render_options.hex_size,
                                    render_options.surface_width,
                                    render_options.surface_height);
        render_image(&maze, &layout, &render_options)?;

        if args.flag_text || !args.flag_text_out.is_empty() {
            warn!("text rendering is only available for rectangular mazes");
        }
        if render_options.output_file.is_none() {
            info!("no --image-out given, the hexagonal maze was not rendered");
        }
    }

    Ok(())
}

fn report_maze<G: MazeGrid>(maze: &Maze<G>, verify: bool) -> Result<()> {
    info!("generated maze of {} cells with {} passages",
          maze.grid().size(),
          maze.passages_count());
    if verify {
        maze.verify().chain_err(|| "generated maze failed verification")?;
        info!("maze verified as perfect");
    }
    Ok(())
}

fn render_image<G, L>(maze: &Maze<G>, layout: &L, render_options: &RenderOptions) -> Result<()>
    where G: MazeGrid,
          L: renderers::GridLayout<G::Coord>
{
    if render_options.output_file.is_some() {
        renderers::render_maze(maze, layout, render_options)?;
    }
    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
