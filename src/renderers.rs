use std::path::{Path, PathBuf};

use error_chain::bail;
use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point as PixelPoint;
use lazy_static::lazy_static;
use log::{debug, info};
use smallvec::SmallVec;

use crate::cells::{Cell, CellSide, HexSide, RectSide};
use crate::coordinates::{AxialCoordinate, Cartesian2DCoordinate, Coordinate};
use crate::errors::*;
use crate::grid_traits::MazeGrid;
use crate::maze::Maze;
use crate::rectgrid::RectGrid;
use crate::units::{Height, HexPixelSize, PixelHeight, PixelWidth, Width};

lazy_static! {
    static ref SQRT_3: f64 = 3.0_f64.sqrt();

    // Unit vectors from a pointed-top hexagon's centre to its corners. Corner i sits at
    // 60i + 30 degrees with y pointing down, so corner 0 is the lower right one.
    static ref HEX_CORNER_OFFSETS: [(f64, f64); 6] = {
        let mut offsets = [(0.0, 0.0); 6];
        for (i, offset) in offsets.iter_mut().enumerate() {
            let angle = (60.0 * i as f64 + 30.0).to_radians();
            *offset = (angle.cos(), angle.sin());
        }
        offsets
    };
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

/// One step of drawing a cell's walls: move the pen without drawing, or draw a line to
/// the point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathInstruction {
    MoveTo(Point),
    LineTo(Point),
}

/// The boundary of one cell in pixel space: a starting corner then one edge per side,
/// walking around the cell back to the start.
#[derive(Debug, Clone, PartialEq)]
pub struct CellOutline<SideT: CellSide> {
    origin: Point,
    edges: SmallVec<[(SideT, Point); 6]>,
}

impl<SideT: CellSide> CellOutline<SideT> {
    pub fn new(origin: Point, edges: SmallVec<[(SideT, Point); 6]>) -> CellOutline<SideT> {
        CellOutline { origin, edges }
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Each side along with the corner its edge ends at, in drawing order.
    #[inline]
    pub fn edges(&self) -> &[(SideT, Point)] {
        &self.edges
    }

    /// The corners of the cell, each once, for filling.
    pub fn polygon(&self) -> SmallVec<[Point; 6]> {
        let corners_count = self.edges.len().saturating_sub(1);
        let mut corners = SmallVec::new();
        corners.push(self.origin);
        corners.extend(self.edges.iter().take(corners_count).map(|&(_, corner)| corner));
        corners
    }

    /// Pen movements outlining the standing walls of `cell`. Open sides are skipped over
    /// with a move.
    pub fn stroke_instructions(&self, cell: &Cell<SideT>) -> Vec<PathInstruction> {
        let mut instructions = Vec::with_capacity(self.edges.len() + 1);
        instructions.push(PathInstruction::MoveTo(self.origin));
        for &(side, corner) in self.edges.iter() {
            if cell.has_side(side) {
                instructions.push(PathInstruction::LineTo(corner));
            } else {
                instructions.push(PathInstruction::MoveTo(corner));
            }
        }
        instructions
    }
}

/// Maps grid coordinates to cell outlines in pixel space.
pub trait GridLayout<CoordT: Coordinate> {
    fn outline(&self, coord: CoordT) -> CellOutline<CoordT::Side>;
}

/// Stretches a rectangular grid over the whole surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectLayout {
    cell_width: f64,
    cell_height: f64,
}

impl RectLayout {
    pub fn new(grid: &RectGrid, surface_width: PixelWidth, surface_height: PixelHeight) -> RectLayout {
        let Width(columns) = grid.width();
        let Height(rows) = grid.height();
        RectLayout {
            cell_width: f64::from(surface_width.0) / columns as f64,
            cell_height: f64::from(surface_height.0) / rows as f64,
        }
    }

    pub fn cell_size(&self) -> (f64, f64) {
        (self.cell_width, self.cell_height)
    }
}

impl GridLayout<Cartesian2DCoordinate> for RectLayout {
    fn outline(&self, coord: Cartesian2DCoordinate) -> CellOutline<RectSide> {
        let left = coord.x as f64 * self.cell_width;
        let top = coord.y as f64 * self.cell_height;
        let right = left + self.cell_width;
        let bottom = top + self.cell_height;

        let edges = [(RectSide::Top, Point::new(right, top)),
                     (RectSide::Right, Point::new(right, bottom)),
                     (RectSide::Bottom, Point::new(left, bottom)),
                     (RectSide::Left, Point::new(left, top))]
            .iter()
            .cloned()
            .collect();
        CellOutline::new(Point::new(left, top), edges)
    }
}

/// Fixed size pointed-top hexagons, with the grid's centre cell in the middle of the
/// surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HexLayout {
    size: f64,
    centre: Point,
}

impl HexLayout {
    pub fn new(size: HexPixelSize,
               surface_width: PixelWidth,
               surface_height: PixelHeight)
               -> HexLayout {
        HexLayout {
            size: size.0,
            centre: Point::new(f64::from(surface_width.0) / 2.0,
                               f64::from(surface_height.0) / 2.0),
        }
    }

    pub fn centre_of(&self, coord: AxialCoordinate) -> Point {
        let (q, r) = (coord.q as f64, coord.r as f64);
        Point::new(self.size * *SQRT_3 * (q + r / 2.0) + self.centre.x,
                   self.size * 1.5 * r + self.centre.y)
    }

    fn corner(&self, centre: Point, index: usize) -> Point {
        let (dx, dy) = HEX_CORNER_OFFSETS[index % 6];
        Point::new(centre.x + self.size * dx, centre.y + self.size * dy)
    }
}

impl GridLayout<AxialCoordinate> for HexLayout {
    fn outline(&self, coord: AxialCoordinate) -> CellOutline<HexSide> {
        let centre = self.centre_of(coord);
        let corner = |i| self.corner(centre, i);

        let edges = [(HexSide::BottomRight, corner(1)),
                     (HexSide::BottomLeft, corner(2)),
                     (HexSide::Left, corner(3)),
                     (HexSide::TopLeft, corner(4)),
                     (HexSide::TopRight, corner(5)),
                     (HexSide::Right, corner(6))]
            .iter()
            .cloned()
            .collect();
        CellOutline::new(corner(0), edges)
    }
}

/// Everything needed to draw one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellDrawing<CoordT: Coordinate> {
    pub coord: CoordT,
    pub fill: SmallVec<[Point; 6]>,
    pub strokes: Vec<PathInstruction>,
}

/// Drawing data for every cell of the grid, in the grid's iteration order.
pub fn draw_commands<G, L>(grid: &G, layout: &L) -> Result<Vec<CellDrawing<G::Coord>>>
    where G: MazeGrid,
          L: GridLayout<G::Coord>
{
    let mut drawings = Vec::with_capacity(grid.size());
    for coord in grid.iter() {
        let cell = grid.cell(coord)?;
        let outline = layout.outline(coord);
        drawings.push(CellDrawing {
            coord,
            fill: outline.polygon(),
            strokes: outline.stroke_instructions(cell),
        });
    }
    Ok(drawings)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub surface_width: PixelWidth,
    pub surface_height: PixelHeight,
    pub hex_size: HexPixelSize,
    pub wall_colour: Rgb<u8>,
    pub cell_colour: Rgb<u8>,
    pub background_colour: Rgb<u8>,
    pub output_file: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            surface_width: PixelWidth(800),
            surface_height: PixelHeight(800),
            hex_size: HexPixelSize(40.0),
            wall_colour: Rgb([0, 0, 0]),
            cell_colour: Rgb([0xff, 0xff, 0xff]),
            background_colour: Rgb([0xd3, 0xd3, 0xd3]),
            output_file: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn new() -> RenderOptionsBuilder {
        RenderOptionsBuilder { options: RenderOptions::default() }
    }
    pub fn surface_width(mut self, width: PixelWidth) -> Self {
        self.options.surface_width = width;
        self
    }
    pub fn surface_height(mut self, height: PixelHeight) -> Self {
        self.options.surface_height = height;
        self
    }
    pub fn hex_size(mut self, size: HexPixelSize) -> Self {
        self.options.hex_size = size;
        self
    }
    pub fn wall_colour(mut self, colour: Rgb<u8>) -> Self {
        self.options.wall_colour = colour;
        self
    }
    pub fn cell_colour(mut self, colour: Rgb<u8>) -> Self {
        self.options.cell_colour = colour;
        self
    }
    pub fn background_colour(mut self, colour: Rgb<u8>) -> Self {
        self.options.background_colour = colour;
        self
    }
    pub fn output_file(mut self, path: Option<&Path>) -> Self {
        self.options.output_file = path.map(Path::to_path_buf);
        self
    }
    pub fn build(self) -> RenderOptions {
        self.options
    }
}

impl Default for RenderOptionsBuilder {
    fn default() -> Self {
        RenderOptionsBuilder::new()
    }
}

/// Rasterise a grid: every cell is filled, then the standing walls are drawn on top.
pub fn render_to_image<G, L>(grid: &G, layout: &L, options: &RenderOptions) -> Result<RgbImage>
    where G: MazeGrid,
          L: GridLayout<G::Coord>
{
    let PixelWidth(width) = options.surface_width;
    let PixelHeight(height) = options.surface_height;
    if width == 0 || height == 0 {
        bail!(ErrorKind::InvalidDimensions(format!("{}x{} pixel image", width, height)));
    }

    let mut image = ImageBuffer::from_pixel(width, height, options.background_colour);
    let drawings = draw_commands(grid, layout)?;

    for drawing in &drawings {
        check_drawable(drawing)?;
    }
    for drawing in &drawings {
        fill_cell(&mut image, &drawing.fill, options.cell_colour);
    }
    for drawing in &drawings {
        stroke_path(&mut image, &drawing.strokes, options.wall_colour);
    }

    debug!("rendered {} cells to a {}x{} image", drawings.len(), width, height);
    Ok(image)
}

/// Render a maze, saving it when the options name an output file.
pub fn render_maze<G, L>(maze: &Maze<G>, layout: &L, options: &RenderOptions) -> Result<RgbImage>
    where G: MazeGrid,
          L: GridLayout<G::Coord>
{
    let image = render_to_image(maze.grid(), layout, options)?;
    if let Some(ref path) = options.output_file {
        save_image(&image, path)?;
    }
    Ok(image)
}

/// Write the image out, always as a PNG.
pub fn save_image(image: &RgbImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)
        .chain_err(|| format!("failed to save maze image to {}", path.display()))?;
    info!("saved maze image to {}", path.display());
    Ok(())
}

// Corners further than this from the surface origin are rejected rather than drawn.
const MAX_PIXEL_COORDINATE: f64 = (1 << 24) as f64;

fn check_drawable<CoordT: Coordinate>(drawing: &CellDrawing<CoordT>) -> Result<()> {
    let stroke_points = drawing.strokes.iter().map(|instruction| match *instruction {
        PathInstruction::MoveTo(point) | PathInstruction::LineTo(point) => point,
    });
    for point in drawing.fill.iter().cloned().chain(stroke_points) {
        let in_range = |v: f64| v.is_finite() && v.abs() <= MAX_PIXEL_COORDINATE;
        if !in_range(point.x) || !in_range(point.y) {
            bail!(ErrorKind::UndrawableLayout(format!("cell {} has a corner at ({}, {})",
                                                      drawing.coord,
                                                      point.x,
                                                      point.y)));
        }
    }
    Ok(())
}

// Lines along the far edges of the surface land one past the last pixel, pull them in.
fn line_end(point: Point, width: u32, height: u32) -> (f32, f32) {
    let pull_in = |value: f64, limit: u32| {
        let pixel = value.round();
        if pixel == f64::from(limit) {
            pixel - 1.0
        } else {
            pixel
        }
    };
    (pull_in(point.x, width) as f32, pull_in(point.y, height) as f32)
}

fn stroke_path(image: &mut RgbImage, instructions: &[PathInstruction], colour: Rgb<u8>) {
    let (width, height) = image.dimensions();
    let mut pen: Option<Point> = None;
    for instruction in instructions {
        match *instruction {
            PathInstruction::MoveTo(point) => pen = Some(point),
            PathInstruction::LineTo(point) => {
                if let Some(from) = pen {
                    draw_line_segment_mut(image,
                                          line_end(from, width, height),
                                          line_end(point, width, height),
                                          colour);
                }
                pen = Some(point);
            }
        }
    }
}

fn fill_cell(image: &mut RgbImage, corners: &[Point], colour: Rgb<u8>) {
    let mut pixel_corners = SmallVec::<[PixelPoint<i32>; 6]>::new();
    for corner in corners {
        let pixel = PixelPoint::new(corner.x.round() as i32, corner.y.round() as i32);
        if pixel_corners.last() != Some(&pixel) {
            pixel_corners.push(pixel);
        }
    }
    while pixel_corners.len() > 1 && pixel_corners.first() == pixel_corners.last() {
        pixel_corners.pop();
    }
    // Cells that shrink below a pixel across are left to their walls.
    if pixel_corners.len() >= 3 {
        draw_polygon_mut(image, &pixel_corners, colour);
    }
}
