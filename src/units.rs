#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Width(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Height(pub usize);

/// Hexagonal grid "radius": the number of rings around the centre cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Radius(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct NodesCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct EdgesCount(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct PixelWidth(pub u32);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct PixelHeight(pub u32);

/// Centre to corner distance of a rendered hexagon.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct HexPixelSize(pub f64);
