//! CSV export of sampled field data.

use std::io::{self, Write};

use crate::sampler::SampleSet;

/// Writes a sample set as CSV: one row per sample, position components
/// followed by field components. 2D samples are zero-padded to 3D so the
/// column layout is uniform.
pub fn write_sample_csv<W: Write>(mut w: W, samples: &SampleSet) -> io::Result<()> {
    writeln!(w, "x,y,z,ex,ey,ez")?;
    for (point, vector) in samples.iter() {
        let [x, y, z] = point.xyz();
        let [ex, ey, ez] = vector.xyz();
        writeln!(
            w,
            "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e}",
            x, y, z, ex, ey, ez
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charge::PointCharge;
    use crate::sampler::{sample, ShapeDescriptor};

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let q = PointCharge::three_d(1.0e-9, 0.0, 0.0, 0.0);
        let shape = ShapeDescriptor::Grid {
            x_range: (-1.0, 1.0),
            y_range: (-1.0, 1.0),
            n_points: 2,
        };
        let set = sample(&q, &shape).unwrap();

        let mut buf = Vec::new();
        write_sample_csv(&mut buf, &set).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "x,y,z,ex,ey,ez");
        assert_eq!(lines.len(), 1 + set.len());
        assert!(lines[1].starts_with("-1.0000000000000000e0,"));
    }
}
