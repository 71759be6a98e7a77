//! Chunk/link/connector classification from the outside walk.

use tessera_core::{ChunkId, ClassTag, Compass, CubeId};
use tessera_grid::{Classification, World};

use crate::articulation::stable_cubes;
use crate::boundary::outside_walk;

/// Working component assignment during the walk decomposition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Comp {
    Unset,
    Link,
    Chunk(u32),
}

/// Classify every cube of the configuration.
///
/// Runs the outside walk with a stack: a cube's first appearance pushes
/// it; a later appearance either closes a two-cube backtrack (both cubes
/// belong to a thin link part) or closes a cycle, popping everything
/// above the matched cube as a freshly numbered chunk. The matched cube
/// becomes a connector when anything remains below it on the stack,
/// otherwise it joins the chunk.
///
/// Cubes that never reach the boundary are chunk interior and inherit
/// the chunk id of a classified neighbour. A final pass merges stray
/// single-leaf links into the chunk behind their connector and combines
/// the component kind with stability into the final tags.
pub fn classify(world: &World) -> Classification {
    let n = world.len();
    let mut marks = Classification::unmarked(n);
    if n == 0 {
        return marks;
    }

    let stable = stable_cubes(world);
    let walk = outside_walk(world);

    let mut comp = vec![Comp::Unset; n];
    let mut connector = vec![false; n];
    let mut on_walk = vec![false; n];
    let mut pushed = vec![false; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut chunks_seen = 0u32;

    for &id in &walk {
        let v = id.index();
        on_walk[v] = true;
        if !pushed[v] {
            pushed[v] = true;
            stack.push(v);
            continue;
        }
        if stack.len() >= 2 && stack[stack.len() - 2] == v {
            // Backtrack over a thin part: the popped cube and the
            // revisited one are both in a 1-component.
            let popped = stack.pop().unwrap_or(v);
            if comp[popped] == Comp::Unset {
                comp[popped] = Comp::Link;
            }
            if comp[v] == Comp::Unset {
                comp[v] = Comp::Link;
            }
        } else if let Some(at) = stack.iter().rposition(|&s| s == v) {
            // Cycle closed: everything above the match is a new chunk.
            while stack.len() > at + 1 {
                if let Some(popped) = stack.pop() {
                    comp[popped] = Comp::Chunk(chunks_seen);
                }
            }
            if at > 0 {
                connector[v] = true;
            } else {
                comp[v] = Comp::Chunk(chunks_seen);
                connector[v] = false;
            }
            chunks_seen += 1;
        }
    }

    // The start cube can come through the walk without ever being
    // popped; it is a link then.
    if let Some(&start) = walk.first() {
        if comp[start.index()] == Comp::Unset && !connector[start.index()] {
            comp[start.index()] = Comp::Link;
        }
    }

    // Cubes off the boundary are chunk interior: flood chunk ids inward.
    loop {
        let mut changed = false;
        for v in 0..n {
            if comp[v] != Comp::Unset || connector[v] {
                continue;
            }
            let Some(cube) = world.cube(CubeId(v as u32)) else {
                continue;
            };
            for dir in Compass::CARDINALS {
                let Some(nb) = world.cube_at(cube.pos.step(dir)) else {
                    continue;
                };
                if let Comp::Chunk(k) = comp[nb.index()] {
                    comp[v] = Comp::Chunk(k);
                    changed = true;
                    break;
                }
            }
        }
        if !changed {
            break;
        }
    }

    // Whatever still has no component behaves as a link.
    for c in comp.iter_mut() {
        if *c == Comp::Unset {
            *c = Comp::Link;
        }
    }

    merge_leaf_links(world, &mut comp, &mut connector);

    for v in 0..n {
        let is_stable = stable.get(v).copied().unwrap_or(true);
        marks.boundary[v] = on_walk[v];
        if connector[v] {
            marks.tags[v] = ClassTag::Connector;
            marks.chunks[v] = None;
            continue;
        }
        match comp[v] {
            Comp::Chunk(k) => {
                marks.tags[v] = if is_stable {
                    ClassTag::ChunkStable
                } else {
                    ClassTag::ChunkCut
                };
                marks.chunks[v] = Some(ChunkId(k));
            }
            _ => {
                marks.tags[v] = if is_stable {
                    ClassTag::LinkStable
                } else {
                    ClassTag::LinkCut
                };
                marks.chunks[v] = None;
            }
        }
    }

    marks
}

/// Fold single-leaf links into the chunk behind their connector.
///
/// A degree-1 link whose sole neighbour is a connector with no other
/// link neighbour is really a chunk fringe: the connector stops being an
/// articulation between parts once the leaf counts as chunk material.
fn merge_leaf_links(world: &World, comp: &mut [Comp], connector: &mut [bool]) {
    let n = world.len();
    for v in 0..n {
        if comp[v] != Comp::Link || connector[v] {
            continue;
        }
        let Some(cube) = world.cube(CubeId(v as u32)) else {
            continue;
        };
        let mut sole = None;
        let mut degree = 0;
        for dir in Compass::CARDINALS {
            if let Some(nb) = world.cube_at(cube.pos.step(dir)) {
                degree += 1;
                sole = Some(nb.index());
            }
        }
        let Some(c) = sole else { continue };
        if degree != 1 || !connector[c] {
            continue;
        }

        // Any other link hanging off the same connector keeps it a
        // connector.
        let Some(conn_cube) = world.cube(CubeId(c as u32)) else {
            continue;
        };
        let mut other_link = false;
        let mut chunk_id = None;
        for dir in Compass::CARDINALS {
            let Some(nb) = world.cube_at(conn_cube.pos.step(dir)) else {
                continue;
            };
            let u = nb.index();
            if u == v {
                continue;
            }
            match comp[u] {
                Comp::Link if !connector[u] => other_link = true,
                Comp::Chunk(k) if chunk_id.is_none() => chunk_id = Some(k),
                _ => {}
            }
        }
        if other_link {
            continue;
        }
        let Some(k) = chunk_id else { continue };
        connector[c] = false;
        comp[c] = Comp::Chunk(k);
        comp[v] = Comp::Chunk(k);
    }
}
