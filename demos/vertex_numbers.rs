use xs_h3_vertex::{
  direction_for_vertex_num, get_base_cell_number, is_pentagon, is_valid_cell, vertex_num_for_direction,
  vertex_rotations, Direction, H3Error, H3Index,
};

fn describe(cell: H3Index) -> Result<(), H3Error> {
  if !is_valid_cell(cell) {
    println!("Cell {:x} is NOT valid.", cell.0);
    return Ok(());
  }

  println!("Cell {:x}", cell.0);
  println!("  Base Cell Number: {}", get_base_cell_number(cell));
  println!("  Is Pentagon: {}", is_pentagon(cell));
  println!("  CCW rotations from home face: {}", vertex_rotations(&cell)?);

  for dir in Direction::NEIGHBORS {
    match vertex_num_for_direction(&cell, dir) {
      Ok(vertex_num) => {
        let back = direction_for_vertex_num(&cell, vertex_num)?;
        println!("  {dir:?}: edge starts at vertex {vertex_num} (vertex {vertex_num} -> {back:?})");
      }
      Err(e) => println!("  {dir:?}: {e}"),
    }
  }
  Ok(())
}

fn main() -> Result<(), H3Error> {
  println!("--- H3 Vertex Numbering Example ---");

  describe(H3Index(0x823d6ffffffffff))?;
  describe(H3Index(0x823007fffffffff))?;

  Ok(())
}
