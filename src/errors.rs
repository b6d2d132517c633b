//! Crate wide `Error`, `ErrorKind`, `Result` and `ResultExt` created by `error_chain!`.
//!
//! Other modules `use crate::errors::*;` to get access to everything.

use error_chain::error_chain;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        DocOptFailure(::docopt::Error);
        ImageFailure(::image::ImageError);
    }

    errors {
        InvalidGridCoordinate(coord: String) {
            description("coordinate is not a member of the grid")
            display("coordinate {} is not a member of the grid", coord)
        }
        NotAdjacent(a: String, b: String) {
            description("cells are not adjacent")
            display("cannot break a wall between non adjacent cells {} and {}", a, b)
        }
        MalformedCoordinate(text: String) {
            description("malformed coordinate text")
            display("malformed coordinate text '{}', expected '{{q: <int>, r: <int>}}'", text)
        }
        InvalidDimensions(reason: String) {
            description("invalid grid dimensions")
            display("invalid grid dimensions: {}", reason)
        }
        UndrawableLayout(reason: String) {
            description("layout cannot be drawn")
            display("layout cannot be drawn: {}", reason)
        }
        ImperfectMaze(reason: String) {
            description("maze is not a spanning tree")
            display("maze is not a spanning tree: {}", reason)
        }
    }
}
