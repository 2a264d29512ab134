// tests/vertex_tests.rs

use xs_h3_vertex::constants::{NUM_BASE_CELLS, NUM_HEX_VERTS, NUM_PENT_VERTS};
use xs_h3_vertex::*;

const ALL_DIGITS: [Direction; 8] = [
  Direction::Center,
  Direction::KAxes,
  Direction::JAxes,
  Direction::JkAxes,
  Direction::IAxes,
  Direction::IkAxes,
  Direction::IjAxes,
  Direction::InvalidDigit,
];

const CHILD_DIGITS: [Direction; 7] = [
  Direction::Center,
  Direction::KAxes,
  Direction::JAxes,
  Direction::JkAxes,
  Direction::IAxes,
  Direction::IkAxes,
  Direction::IjAxes,
];

/// Every valid cell at resolutions 1 and 2.
fn res1_and_res2_cells() -> Vec<H3Index> {
  let mut cells = Vec::new();
  for bc in 0..NUM_BASE_CELLS {
    for d1 in CHILD_DIGITS {
      cells.push(cell_from_digits(bc, &[d1]));
      for d2 in CHILD_DIGITS {
        cells.push(cell_from_digits(bc, &[d1, d2]));
      }
    }
  }
  cells.retain(|h| is_valid_cell(*h));
  cells
}

/// Vertex numbers of every direction `cell` accepts, sorted.
fn sorted_vertex_nums(cell: &H3Index) -> Vec<i32> {
  let mut nums: Vec<i32> = ALL_DIGITS.iter().filter_map(|dir| vertex_num_for_direction(cell, *dir).ok()).collect();
  nums.sort_unstable();
  nums
}

#[test]
fn test_vertex_num_for_direction_hex() {
  let origin = H3Index(0x823d6ffffffffff);
  assert!(is_valid_cell(origin));
  assert!(!is_pentagon(origin));

  let mut seen = [false; NUM_HEX_VERTS as usize];
  for dir in Direction::NEIGHBORS {
    let vertex_num = vertex_num_for_direction(&origin, dir).expect("hexagon direction");
    assert!((0..NUM_HEX_VERTS).contains(&vertex_num), "{dir:?} -> {vertex_num}");
    assert!(!seen[vertex_num as usize], "vertex {vertex_num} used twice");
    seen[vertex_num as usize] = true;
  }
}

#[test]
fn test_vertex_num_for_direction_pent() {
  let pentagon = H3Index(0x823007fffffffff);
  assert!(is_pentagon(pentagon));

  let mut seen = [false; NUM_PENT_VERTS as usize];
  for dir in Direction::NEIGHBORS.into_iter().filter(|d| *d != Direction::KAxes) {
    let vertex_num = vertex_num_for_direction(&pentagon, dir).expect("pentagon direction");
    assert!((0..NUM_PENT_VERTS).contains(&vertex_num), "{dir:?} -> {vertex_num}");
    assert!(!seen[vertex_num as usize], "vertex {vertex_num} used twice");
    seen[vertex_num as usize] = true;
  }
}

#[test]
fn test_vertex_num_for_direction_bad_directions() {
  let pentagon = H3Index(0x823007fffffffff);
  assert_eq!(vertex_num_for_direction(&pentagon, Direction::Center), Err(H3Error::Domain));
  assert_eq!(vertex_num_for_direction(&pentagon, Direction::InvalidDigit), Err(H3Error::Domain));
  assert_eq!(vertex_num_for_direction(&pentagon, Direction::KAxes), Err(H3Error::Domain));

  let origin = H3Index(0x823d6ffffffffff);
  assert_eq!(vertex_num_for_direction(&origin, Direction::Center), Err(H3Error::Domain));
  assert_eq!(vertex_num_for_direction(&origin, Direction::InvalidDigit), Err(H3Error::Domain));

  // ordinals past the enumeration never become a Direction
  assert_eq!(Direction::try_from(8u8), Err(H3Error::Domain));
}

#[test]
fn test_res0_cells_use_home_orientation() {
  for bc in 0..NUM_BASE_CELLS {
    let cell = cell_from_digits(bc, &[]);
    assert_eq!(vertex_rotations(&cell), Ok(0), "base cell {bc}");

    if is_pentagon(cell) {
      assert_eq!(vertex_num_for_direction(&cell, Direction::JAxes), Ok(1));
      assert_eq!(vertex_num_for_direction(&cell, Direction::IAxes), Ok(4));
      assert_eq!(vertex_num_for_direction(&cell, Direction::KAxes), Err(H3Error::Domain));
    } else {
      assert_eq!(vertex_num_for_direction(&cell, Direction::KAxes), Ok(3));
      assert_eq!(vertex_num_for_direction(&cell, Direction::IjAxes), Ok(0));
    }
  }
}

#[test]
fn test_pentagon_base_cells_are_pentagons_at_res0() {
  let pentagons: Vec<i32> = pentagon_base_cells().collect();
  assert_eq!(pentagons.len(), 12);
  for bc in pentagons {
    assert!(is_pentagon(cell_from_digits(bc, &[])), "base cell {bc}");
    assert_eq!(sorted_vertex_nums(&cell_from_digits(bc, &[])), vec![0, 1, 2, 3, 4]);
  }
}

#[test]
fn test_all_children_resolve() {
  for cell in res1_and_res2_cells() {
    let rotations = vertex_rotations(&cell).unwrap_or_else(|e| panic!("{:x}: {e}", cell.0));
    assert!((0..6).contains(&rotations), "{:x}: {rotations}", cell.0);

    let expected: Vec<i32> = if is_pentagon(cell) { (0..NUM_PENT_VERTS).collect() } else { (0..NUM_HEX_VERTS).collect() };
    assert_eq!(sorted_vertex_nums(&cell), expected, "{:x}", cell.0);
  }
}

#[test]
fn test_all_children_invert() {
  for cell in res1_and_res2_cells() {
    for dir in ALL_DIGITS {
      if let Ok(vertex_num) = vertex_num_for_direction(&cell, dir) {
        assert_eq!(direction_for_vertex_num(&cell, vertex_num), Ok(dir), "{:x} {dir:?}", cell.0);
      }
    }
  }
}

#[test]
fn test_cell_facts_agree_with_index() {
  for cell in res1_and_res2_cells() {
    let facts = CellFacts::from_cell(cell).expect("valid cell");
    assert_eq!(vertex_rotations(&facts), vertex_rotations(&cell), "{:x}", cell.0);
    for dir in ALL_DIGITS {
      assert_eq!(vertex_num_for_direction(&facts, dir), vertex_num_for_direction(&cell, dir), "{:x}", cell.0);
    }
  }
}

/// Known cells: index, projected face, rotations, and the vertex number for
/// each direction in `Direction::NEIGHBORS` order (K, J, JK, I, IK, IJ).
#[rustfmt::skip]
const KNOWN_CELLS: [(u64, i32, i32, [i32; 6]); 23] = [
  // fixture hexagon
  (0x823d6ffffffffff,  0, 0, [3, 1, 2, 5, 4, 0]), // base cell 30, res 2
  // fixture pentagon
  (0x823007fffffffff, 10, 0, [INVALID_VERTEX_NUM, 1, 2, 4, 3, 0]), // base cell 24, res 2
  // hexagon off home face
  (0x81033ffffffffff,  1, 5, [4, 2, 3, 0, 5, 1]), // base cell 1, res 1
  (0x810bbffffffffff,  0, 5, [4, 2, 3, 0, 5, 1]), // base cell 5, res 1
  (0x8216a7fffffffff,  6, 3, [0, 4, 5, 2, 1, 3]), // base cell 11, res 2
  (0x821a97fffffffff,  2, 5, [4, 2, 3, 0, 5, 1]), // base cell 13, res 2
  (0x8301b2fffffffff,  0, 5, [4, 2, 3, 0, 5, 1]), // base cell 0, res 3
  (0x8307b6fffffffff,  1, 5, [4, 2, 3, 0, 5, 1]), // base cell 3, res 3
  (0x8411b29ffffffff,  4, 5, [4, 2, 3, 0, 5, 1]), // base cell 8, res 4
  (0x8413b6dffffffff,  1, 5, [4, 2, 3, 0, 5, 1]), // base cell 9, res 4
  // JK crossing onto IK face
  (0x8208effffffffff,  1, 1, [2, 0, 1, 4, 3, 5]), // base cell 4, res 2
  (0x831cc9fffffffff,  7, 3, [0, 4, 5, 2, 1, 3]), // base cell 14, res 3
  (0x824ceffffffffff,  8, 3, [0, 4, 5, 2, 1, 3]), // base cell 38, res 2
  (0x837ec9fffffffff, 10, 3, [0, 4, 5, 2, 1, 3]), // base cell 63, res 3
  (0x82eaeffffffffff, 18, 1, [2, 0, 1, 4, 3, 5]), // base cell 117, res 2
  (0x84a6c83ffffffff, 14, 3, [0, 4, 5, 2, 1, 3]), // base cell 83, res 4
  // leading IK past IK face
  (0x820977fffffffff,  2, 3, [0, 4, 5, 2, 1, 3]), // base cell 4, res 2
  (0x836352fffffffff,  0, 1, [2, 0, 1, 4, 3, 5]), // base cell 49, res 3
  (0x83eb52fffffffff, 17, 3, [0, 4, 5, 2, 1, 3]), // base cell 117, res 3
  // leading IK on IK face
  (0x823147fffffffff,  6, 4, [5, 3, 4, 1, 0, 2]), // base cell 24, res 2
  (0x83c340fffffffff, 12, 4, [5, 3, 4, 1, 0, 2]), // base cell 97, res 3
  // leading I off home face
  (0x830900fffffffff,  2, 3, [0, 4, 5, 2, 1, 3]), // base cell 4, res 3
  (0x829107fffffffff, 16, 1, [2, 0, 1, 4, 3, 5]), // base cell 72, res 2
];

#[test]
fn test_known_cells() {
  for (index, face, rotations, vertex_nums) in KNOWN_CELLS {
    let cell = H3Index(index);
    assert!(is_valid_cell(cell), "{index:x}");
    assert_eq!(cell.face(), Ok(face), "{index:x} face");
    assert_eq!(vertex_rotations(&cell), Ok(rotations), "{index:x} rotations");
    for (dir, expected) in Direction::NEIGHBORS.into_iter().zip(vertex_nums) {
      let expected = if expected == INVALID_VERTEX_NUM { Err(H3Error::Domain) } else { Ok(expected) };
      assert_eq!(vertex_num_for_direction(&cell, dir), expected, "{index:x} {dir:?}");
    }
  }
}

#[test]
fn test_pentagon_seam_crossings() {
  // up to res 2, only the JK-then-IK grandchild of each pentagon crosses the seam
  let mut crossed = Vec::new();
  for cell in res1_and_res2_cells() {
    if is_pentagon(cell) || !cell.is_base_cell_pentagon() {
      continue;
    }
    let facts = CellFacts::from_cell(cell).expect("valid cell");
    let row = base_cell_vertex_rotations(facts.base_cell).expect("base cell");
    let slot = row.iter().find(|s| s.face == facts.face).expect("face listed");
    let rotations = vertex_rotations(&cell).expect("valid cell");
    if rotations != slot.ccw_rot60 {
      assert_eq!(facts.leading_digit, Direction::JkAxes, "{:x}", cell.0);
      assert_eq!(facts.face, row[3].face, "{:x} lands on the IK sector face", cell.0);
      assert_eq!(rotations, (slot.ccw_rot60 + 5) % 6, "{:x}", cell.0);
      crossed.push(cell);
    }
  }

  let expected: Vec<H3Index> =
    pentagon_base_cells().map(|bc| cell_from_digits(bc, &[Direction::JkAxes, Direction::IkAxes])).collect();
  assert_eq!(crossed, expected);
}

#[test]
fn test_leading_ik_never_lands_on_jk_sector_face() {
  // the leading IK rotation moves these cells off the JK sector face
  for bc in pentagon_base_cells() {
    let row = base_cell_vertex_rotations(bc).expect("base cell");
    for d2 in CHILD_DIGITS {
      for d3 in CHILD_DIGITS {
        let cell = cell_from_digits(bc, &[Direction::IkAxes, d2, d3]);
        let face = cell.face().expect("valid cell");
        assert_ne!(face, row[1].face, "{:x}", cell.0);
        let slot = row.iter().find(|s| s.face == face).expect("face listed");
        assert_eq!(vertex_rotations(&cell), Ok(slot.ccw_rot60), "{:x}", cell.0);
      }
    }
  }
}

#[test]
fn test_results_are_deterministic_across_threads() {
  let cells = res1_and_res2_cells();
  let compute = || -> Vec<Result<i32, H3Error>> {
    cells
      .iter()
      .flat_map(|cell| ALL_DIGITS.iter().map(move |dir| vertex_num_for_direction(cell, *dir)))
      .collect()
  };
  let expected = compute();

  std::thread::scope(|s| {
    let handles: Vec<_> = (0..4).map(|_| s.spawn(compute)).collect();
    for handle in handles {
      assert_eq!(handle.join().expect("worker panicked"), expected);
    }
  });
}
