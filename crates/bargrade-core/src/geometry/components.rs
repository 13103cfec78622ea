use std::collections::HashMap;

use ndarray::Array2;

use super::crop::CropRect;

/// Statistics for a single connected blob of foreground pixels.
#[derive(Clone, Debug)]
pub struct ComponentStats {
    pub label: u32,
    /// Number of pixels in the component.
    pub area: usize,
    /// Bounding box: (min_row, max_row, min_col, max_col), inclusive.
    pub bbox: (usize, usize, usize, usize),
}

impl ComponentStats {
    pub fn bounding_rect(&self) -> CropRect {
        let (min_row, max_row, min_col, max_col) = self.bbox;
        CropRect {
            x: min_col as u32,
            y: min_row as u32,
            width: (max_col - min_col + 1) as u32,
            height: (max_row - min_row + 1) as u32,
        }
    }
}

/// Two-pass connected component labeling with union-find, 8-connectivity.
///
/// Returns component statistics sorted by area descending (largest first);
/// ties keep scan order of first appearance.
pub fn connected_components(mask: &Array2<bool>) -> Vec<ComponentStats> {
    let (h, w) = mask.dim();
    if h == 0 || w == 0 {
        return Vec::new();
    }

    let mut labels = Array2::<u32>::zeros((h, w));
    let mut next_label: u32 = 1;
    // Index 0 unused; labels start at 1.
    let mut parent: Vec<u32> = vec![0];

    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }

            // Already-visited neighbors: W, NW, N, NE.
            let mut neighbors = [0u32; 4];
            if col > 0 {
                neighbors[0] = labels[[row, col - 1]];
            }
            if row > 0 {
                if col > 0 {
                    neighbors[1] = labels[[row - 1, col - 1]];
                }
                neighbors[2] = labels[[row - 1, col]];
                if col + 1 < w {
                    neighbors[3] = labels[[row - 1, col + 1]];
                }
            }

            let smallest = neighbors.iter().copied().filter(|&l| l > 0).min();
            match smallest {
                None => {
                    parent.push(next_label);
                    labels[[row, col]] = next_label;
                    next_label += 1;
                }
                Some(min_label) => {
                    labels[[row, col]] = min_label;
                    for &n in neighbors.iter().filter(|&&l| l > 0 && l != min_label) {
                        union(&mut parent, min_label, n);
                    }
                }
            }
        }
    }

    for i in 1..next_label as usize {
        parent[i] = find(&parent, i as u32);
    }

    let mut order: Vec<u32> = Vec::new();
    let mut stats_map = HashMap::<u32, ComponentStats>::new();

    for row in 0..h {
        for col in 0..w {
            let lbl = labels[[row, col]];
            if lbl == 0 {
                continue;
            }
            let root = parent[lbl as usize];

            let entry = stats_map.entry(root).or_insert_with(|| {
                order.push(root);
                ComponentStats {
                    label: root,
                    area: 0,
                    bbox: (row, row, col, col),
                }
            });

            entry.area += 1;
            entry.bbox.0 = entry.bbox.0.min(row);
            entry.bbox.1 = entry.bbox.1.max(row);
            entry.bbox.2 = entry.bbox.2.min(col);
            entry.bbox.3 = entry.bbox.3.max(col);
        }
    }

    let mut components: Vec<ComponentStats> = order
        .into_iter()
        .filter_map(|root| stats_map.remove(&root))
        .collect();
    components.sort_by(|a, b| b.area.cmp(&a.area));
    components
}

fn find(parent: &[u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        x = parent[x as usize];
    }
    x
}

fn union(parent: &mut [u32], a: u32, b: u32) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        // Merge larger root into smaller root to keep labels consistent.
        let (small, big) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent[big as usize] = small;
    }
}
