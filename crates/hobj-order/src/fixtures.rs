//! Graphs shared by the scheduler tests.

use crate::graph::Graph;

pub fn cycle(n: usize) -> Graph<usize> {
    Graph::new((0..n).map(|i| (i, vec![(i + 1) % n, (i + n - 1) % n]))).unwrap()
}

/// `rows × cols` square grid, node `i * cols + j`.
pub fn grid(rows: usize, cols: usize) -> Graph<usize> {
    let mut edges = Vec::new();
    for i in 0..rows {
        for j in 0..cols {
            let v = i * cols + j;
            if j + 1 < cols {
                edges.push((v, v + 1));
            }
            if i + 1 < rows {
                edges.push((v, v + cols));
            }
        }
    }
    Graph::from_edges(edges).unwrap()
}

fn from_lists(lists: &[[usize; 3]]) -> Graph<usize> {
    Graph::new(lists.iter().enumerate().map(|(i, nbrs)| (i, nbrs.to_vec()))).unwrap()
}

/// Dodecahedron (C20 fullerene).
pub fn c20() -> Graph<usize> {
    from_lists(&[
        [1, 2, 3], [0, 4, 19], [0, 7, 18], [0, 5, 6], [1, 5, 15],
        [3, 4, 8], [3, 7, 9], [2, 6, 10], [5, 9, 12], [6, 8, 11],
        [7, 11, 17], [9, 10, 13], [8, 13, 15], [11, 12, 14], [13, 16, 17],
        [4, 12, 16], [14, 15, 19], [10, 14, 18], [2, 17, 19], [1, 16, 18],
    ])
}

/// Truncated icosahedron (C60 fullerene).
pub fn c60() -> Graph<usize> {
    from_lists(&[
        [1, 2, 3], [0, 4, 58], [0, 8, 59], [0, 5, 6], [1, 9, 32],
        [3, 9, 10], [3, 7, 11], [6, 8, 14], [2, 7, 16], [4, 5, 17],
        [5, 11, 19], [6, 10, 12], [11, 13, 21], [12, 14, 23], [7, 13, 15],
        [14, 16, 25], [8, 15, 44], [9, 18, 33], [17, 19, 26], [10, 18, 20],
        [19, 21, 27], [12, 20, 22], [21, 23, 29], [13, 22, 24], [23, 25, 31],
        [15, 24, 42], [18, 27, 35], [20, 26, 28], [27, 29, 37], [22, 28, 30],
        [29, 31, 38], [24, 30, 41], [4, 33, 48], [17, 32, 34], [33, 35, 45],
        [26, 34, 36], [35, 37, 46], [28, 36, 38], [30, 37, 39], [38, 40, 47],
        [39, 41, 52], [31, 40, 42], [25, 41, 43], [42, 44, 53], [16, 43, 57],
        [34, 46, 49], [36, 45, 47], [39, 46, 51], [32, 49, 54], [45, 48, 50],
        [49, 51, 55], [47, 50, 52], [40, 51, 53], [43, 52, 56], [48, 55, 58],
        [50, 54, 56], [53, 55, 57], [44, 56, 59], [1, 54, 59], [2, 57, 58],
    ])
}
