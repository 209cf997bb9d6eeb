use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::dims::Dims;

use super::{Grid, Way};

/// Neighbor list of a single vertex, at most four entries on a 4-connected grid.
pub type Neighbors = SmallVec<[usize; 4]>;

/// Undirected graph over the open cells of a [`Grid`].
///
/// Vertices are identified by the linear cell index `y * width + x`, the
/// [`Dims`] accessors translate back and forth. Neighbors of each vertex are
/// stored in [`Way::ALL`] order (right, left, bottom, top).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    size: Dims,
    vertices: Vec<bool>,
    adjacency: Vec<Neighbors>,
    vertex_count: usize,
}

impl AdjacencyGraph {
    pub fn from_grid(grid: &Grid) -> Self {
        let size = grid.size();
        let cell_count = grid.width() * grid.height();

        let mut vertices = vec![false; cell_count];
        let mut adjacency = vec![Neighbors::new(); cell_count];
        let mut vertex_count = 0;

        for pos in grid.iter_open() {
            let idx = Self::linear(size, pos);
            vertices[idx] = true;
            vertex_count += 1;

            for way in Way::ALL {
                let next = pos + way.offset();
                if grid.is_open(next) {
                    adjacency[idx].push(Self::linear(size, next));
                }
            }
        }

        Self {
            size,
            vertices,
            adjacency,
            vertex_count,
        }
    }

    fn linear(size: Dims, pos: Dims) -> usize {
        (pos.1 * size.0 + pos.0) as usize
    }

    pub fn size(&self) -> Dims {
        self.size
    }

    /// Number of cell slots, the upper bound of every vertex index.
    pub fn capacity(&self) -> usize {
        self.vertices.len()
    }

    /// Index of the vertex at `pos`, or `None` if `pos` is outside the grid or blocked.
    pub fn index(&self, pos: Dims) -> Option<usize> {
        if !pos.all_non_negative() || pos.0 >= self.size.0 || pos.1 >= self.size.1 {
            return None;
        }

        let idx = Self::linear(self.size, pos);
        self.vertices[idx].then_some(idx)
    }

    pub fn pos(&self, idx: usize) -> Dims {
        let width = self.size.0 as usize;
        Dims((idx % width) as i32, (idx / width) as i32)
    }

    pub fn contains(&self, pos: Dims) -> bool {
        self.index(pos).is_some()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Vertex indices in ascending (row-major) order.
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| v.then_some(i))
    }

    pub fn neighbors_of(&self, idx: usize) -> &[usize] {
        &self.adjacency[idx]
    }

    /// Neighbors of `pos` in canonical order, empty for non-vertices.
    pub fn neighbors(&self, pos: Dims) -> impl Iterator<Item = Dims> + '_ {
        self.index(pos)
            .map(|idx| self.neighbors_of(idx))
            .unwrap_or(&[])
            .iter()
            .map(|&n| self.pos(n))
    }

    pub fn degree(&self, pos: Dims) -> usize {
        self.index(pos).map_or(0, |idx| self.adjacency[idx].len())
    }

    pub fn is_adjacent(&self, a: Dims, b: Dims) -> bool {
        match (self.index(a), self.index(b)) {
            (Some(a), Some(b)) => self.adjacency[a].contains(&b),
            _ => false,
        }
    }

    /// Collapses corridors into weighted edges.
    ///
    /// Only vertices whose degree is not 2 are kept. Each kept vertex is wired
    /// to the kept vertices found by walking its corridors, the edge weight being
    /// the number of steps walked. Cycles made purely of corridor cells have no
    /// kept vertex and disappear, self-loops are skipped.
    pub fn contract(&self) -> ContractedGraph {
        let mut edges: HashMap<usize, SmallVec<[(usize, usize); 4]>> = HashMap::new();

        for v in self.vertices().filter(|&v| self.adjacency[v].len() != 2) {
            let entry = edges.entry(v).or_default();

            for &first in &self.adjacency[v] {
                let (mut prev, mut cur, mut len) = (v, first, 1);

                while self.adjacency[cur].len() == 2 {
                    let next = if self.adjacency[cur][0] == prev {
                        self.adjacency[cur][1]
                    } else {
                        self.adjacency[cur][0]
                    };
                    (prev, cur) = (cur, next);
                    len += 1;
                }

                if cur != v {
                    entry.push((cur, len));
                }
            }
        }

        ContractedGraph {
            size: self.size,
            edges,
        }
    }
}

/// Junction and dead-end graph produced by [`AdjacencyGraph::contract`].
#[derive(Debug, Clone)]
pub struct ContractedGraph {
    size: Dims,
    edges: HashMap<usize, SmallVec<[(usize, usize); 4]>>,
}

impl ContractedGraph {
    fn pos(&self, idx: usize) -> Dims {
        let width = self.size.0 as usize;
        Dims((idx % width) as i32, (idx / width) as i32)
    }

    fn index(&self, pos: Dims) -> Option<usize> {
        if !pos.all_non_negative() || pos.0 >= self.size.0 || pos.1 >= self.size.1 {
            return None;
        }

        let idx = (pos.1 * self.size.0 + pos.0) as usize;
        self.edges.contains_key(&idx).then_some(idx)
    }

    pub fn contains(&self, pos: Dims) -> bool {
        self.index(pos).is_some()
    }

    pub fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    /// Kept vertices, sorted row-major.
    pub fn vertices(&self) -> Vec<Dims> {
        let mut vertices: Vec<_> = self.edges.keys().map(|&i| self.pos(i)).collect();
        vertices.sort();
        vertices
    }

    /// Kept vertices reachable from `pos` through a corridor, with the corridor length.
    pub fn neighbors(&self, pos: Dims) -> impl Iterator<Item = (Dims, usize)> + '_ {
        self.index(pos)
            .and_then(|idx| self.edges.get(&idx))
            .map(|e| e.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|&(n, len)| (self.pos(n), len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(rows: &[&str]) -> AdjacencyGraph {
        AdjacencyGraph::from_grid(&Grid::from_rows(rows).unwrap())
    }

    #[test]
    fn neighbor_order_is_canonical() {
        let g = graph(&["#####", "#...#", "#...#", "#...#", "#####"]);
        let center: Vec<_> = g.neighbors(Dims(2, 2)).collect();
        assert_eq!(center, vec![Dims(3, 2), Dims(1, 2), Dims(2, 3), Dims(2, 1)]);
        assert_eq!(g.vertex_count(), 9);
        assert_eq!(g.edge_count(), 12);
    }

    #[test]
    fn undirected() {
        let g = graph(&["######", "#..#.#", "#.##.#", "#....#", "######"]);
        for v in g.vertices() {
            let pos = g.pos(v);
            for n in g.neighbors(pos) {
                assert!(g.neighbors(n).any(|back| back == pos));
            }
        }
    }

    #[test]
    fn blocked_and_out_of_bounds_are_not_vertices() {
        let g = graph(&["###", "#.#", "###"]);
        assert_eq!(g.index(Dims(1, 1)), Some(4));
        assert_eq!(g.index(Dims(0, 0)), None);
        assert_eq!(g.index(Dims(3, 1)), None);
        assert_eq!(g.index(Dims(-1, 1)), None);
        assert_eq!(g.neighbors(Dims(0, 0)).count(), 0);
        assert_eq!(g.degree(Dims(1, 1)), 0);
    }

    #[test]
    fn no_open_cells() {
        let g = graph(&["###", "###"]);
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.vertices().count(), 0);
    }

    #[test]
    fn contract_corridors() {
        // dead end (1,1), junction (3,3), dead ends (5,3) and (3,5)
        let g = graph(&[
            "#######", //
            "#.#####", //
            "#.#####", //
            "#.....#", //
            "###.###", //
            "###.###", //
            "#######", //
        ]);
        let c = g.contract();
        assert_eq!(
            c.vertices(),
            vec![Dims(1, 1), Dims(3, 3), Dims(5, 3), Dims(3, 5)]
        );

        let from_dead_end: Vec<_> = c.neighbors(Dims(1, 1)).collect();
        assert_eq!(from_dead_end, vec![(Dims(3, 3), 4)]);

        let mut from_junction: Vec<_> = c.neighbors(Dims(3, 3)).collect();
        from_junction.sort();
        assert_eq!(
            from_junction,
            vec![(Dims(1, 1), 4), (Dims(5, 3), 2), (Dims(3, 5), 2)]
        );

        // corridor cells are gone
        assert!(!c.contains(Dims(1, 3)));
        // the source graph is untouched
        assert_eq!(g.vertex_count(), 9);
    }

    #[test]
    fn contract_drops_pure_cycles() {
        let g = graph(&["#####", "#...#", "#.#.#", "#...#", "#####"]);
        let c = g.contract();
        assert_eq!(c.vertex_count(), 0);
    }
}
