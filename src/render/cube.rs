use super::vertex::Vertex;

/// Two offset quads (front at z=0, back at z=-1) joined into a 12-triangle
/// solid. Uploaded once at startup and never rewritten.
pub const VERTICES: &[Vertex] = &[
    Vertex {
        position: [0.5, 0.5, 0.0],
        color: [1.0, 0.0, 0.0],
    },
    Vertex {
        position: [0.5, -0.5, 0.0],
        color: [0.0, 1.0, 0.0],
    },
    Vertex {
        position: [-0.5, -0.5, 0.0],
        color: [0.0, 0.0, 1.0],
    },
    Vertex {
        position: [-0.5, 0.5, 0.0],
        color: [1.0, 0.0, 1.0],
    },
    Vertex {
        position: [0.5, -0.5, -1.0],
        color: [0.5, 0.5, 1.0],
    },
    Vertex {
        position: [0.5, 0.5, -1.0],
        color: [1.0, 1.0, 0.5],
    },
    Vertex {
        position: [-0.5, 0.5, -1.0],
        color: [0.2, 0.2, 0.5],
    },
    Vertex {
        position: [-0.5, -0.5, -1.0],
        color: [1.0, 0.0, 1.0],
    },
];

#[rustfmt::skip]
pub const INDICES: &[u32] = &[
    0, 1, 3,
    1, 2, 3,
    0, 1, 4,
    0, 4, 5,
    0, 5, 6,
    0, 3, 6,
    4, 5, 6,
    4, 6, 7,
    2, 3, 6,
    2, 6, 7,
    1, 4, 7,
    1, 2, 7,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_counts() {
        assert_eq!(VERTICES.len(), 8);
        assert_eq!(INDICES.len(), 36);
        assert_eq!(INDICES.len() % 3, 0);
    }

    #[test]
    fn test_indices_reference_valid_vertices() {
        assert!(INDICES.iter().all(|&i| (i as usize) < VERTICES.len()));
    }

    #[test]
    fn test_vertex_buffer_bytes() {
        let floats: &[f32] = bytemuck::cast_slice(VERTICES);
        assert_eq!(floats.len(), 48);
        // First vertex: top-right position, red.
        assert_eq!(&floats[..6], &[0.5, 0.5, 0.0, 1.0, 0.0, 0.0]);
        // Last vertex: back bottom-left, magenta.
        assert_eq!(&floats[42..], &[-0.5, -0.5, -1.0, 1.0, 0.0, 1.0]);
        assert_eq!(bytemuck::cast_slice::<Vertex, u8>(VERTICES).len(), 48 * 4);
    }

    #[test]
    fn test_index_buffer_bytes() {
        let bytes: &[u8] = bytemuck::cast_slice(INDICES);
        assert_eq!(bytes.len(), 36 * std::mem::size_of::<u32>());
        assert_eq!(&INDICES[..3], &[0, 1, 3]);
        assert_eq!(&INDICES[33..], &[1, 2, 7]);
    }
}
