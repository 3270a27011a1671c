//! Legacy VTK ASCII export for inspecting sampled fields in ParaView.

use std::io::{self, Write};

use crate::sampler::SampleSet;

/// Writes the legacy VTK ASCII file header.
pub fn write_vtk_header<W: Write>(mut writer: W, title: &str) -> io::Result<()> {
    writeln!(writer, "# vtk DataFile Version 3.0")?;
    writeln!(writer, "{}", title)?;
    writeln!(writer, "ASCII")?;
    Ok(())
}

/// Writes a sample set as VTK polydata with a point-data vector attribute
/// named `field`. VTK geometry is always 3D; 2D samples are zero-padded.
pub fn write_sample_vtk<W: Write>(mut w: W, title: &str, samples: &SampleSet) -> io::Result<()> {
    write_vtk_header(&mut w, title)?;
    writeln!(w, "DATASET POLYDATA")?;
    writeln!(w, "POINTS {} double", samples.len())?;
    for point in samples.points() {
        let [x, y, z] = point.xyz();
        writeln!(w, "{:.16e} {:.16e} {:.16e}", x, y, z)?;
    }
    writeln!(w, "POINT_DATA {}", samples.len())?;
    writeln!(w, "VECTORS field double")?;
    for vector in samples.vectors() {
        let [ex, ey, ez] = vector.xyz();
        writeln!(w, "{:.16e} {:.16e} {:.16e}", ex, ey, ez)?;
    }
    Ok(())
}
