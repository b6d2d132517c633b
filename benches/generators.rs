use criterion::{criterion_group, criterion_main, Criterion};
use gridmazes::{
    generators,
    hexgrid::HexGrid,
    maze::Maze,
    rectgrid::RectGrid,
    renderers::{self, HexLayout, RectLayout, RenderOptions},
    units::{Height, Radius, Width},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_recursive_backtracker_rect_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("recursive_backtracker_rect_32", move |b| {
        b.iter(|| {
            let mut g = RectGrid::new(Width(32), Height(32)).unwrap();
            generators::recursive_backtracker(&mut g, &mut rng).unwrap()
        })
    });
}

fn bench_recursive_backtracker_hex_16(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(16);
    c.bench_function("recursive_backtracker_hex_16", move |b| {
        b.iter(|| {
            let mut g = HexGrid::new(Radius(16)).unwrap();
            generators::recursive_backtracker(&mut g, &mut rng).unwrap()
        })
    });
}

fn bench_hex_grid_construction_16(c: &mut Criterion) {
    c.bench_function("hex_grid_construction_16", |b| b.iter(|| HexGrid::new(Radius(16)).unwrap()));
}

fn bench_render_rect_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(1);
    let maze = Maze::generate(RectGrid::new(Width(32), Height(32)).unwrap(), &mut rng).unwrap();
    let options = RenderOptions::default();
    let layout = RectLayout::new(maze.grid(), options.surface_width, options.surface_height);
    c.bench_function("render_rect_32", move |b| {
        b.iter(|| renderers::render_to_image(maze.grid(), &layout, &options).unwrap())
    });
}

fn bench_render_hex_5(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(1);
    let maze = Maze::generate(HexGrid::new(Radius(5)).unwrap(), &mut rng).unwrap();
    let options = RenderOptions::default();
    let layout = HexLayout::new(options.hex_size, options.surface_width, options.surface_height);
    c.bench_function("render_hex_5", move |b| {
        b.iter(|| renderers::render_to_image(maze.grid(), &layout, &options).unwrap())
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_rect_32,
    bench_recursive_backtracker_hex_16,
    bench_hex_grid_construction_16,
    bench_render_rect_32,
    bench_render_hex_5
);
criterion_main!(benches);
