
use std::io::Write;
use tempfile::NamedTempFile;

pub const GRAPH: &str = "c tiny road network
p sp 4 5
a 1 2 3
a 2 3 4

a 3 4 2
a 1 4 20
a 4 1 1
";

pub const COORDINATES: &str = "c coordinates
p aux sp co 4
v 1 0 0
v 2 3 0
v 3 6 0
v 4 8 0
";

pub const QUERIES: &str = "p aux sp p2p 2
q 1 4
q 4 3
";

pub fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
