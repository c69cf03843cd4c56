//! Tests for the CSV tables written into bundles

#[cfg(test)]
mod tests {
    use kaleidostitch::generation::engine::builtin;
    use kaleidostitch::PatternRequest;
    use kaleidostitch::io::table::{indices_csv, palette_csv, readme_txt, stitch_counts_csv};

    // Tests the index table layout on a small solid ring
    #[test]
    fn test_indices_csv() {
        let grid = builtin().generate("solid-ring", 3, 0).unwrap();
        assert_eq!(
            indices_csv(&grid),
            "y\\x,0,1,2\n0,1,1,1\n1,1,0,1\n2,1,1,1\n"
        );
    }

    // Tests the palette table lists every index with its hex color
    #[test]
    fn test_palette_csv() {
        let palette = builtin().resolve_palette("mono").unwrap();
        assert_eq!(
            palette_csv(palette),
            "index,hex\n0,#FFFFFF\n1,#000000\n2,#262626\n3,#4D4D4D\n4,#737373\n5,#999999\n6,#BFBFBF\n"
        );
    }

    // Tests stitch counts include unused colors and sum to the grid area
    #[test]
    fn test_stitch_counts_csv() {
        let engine = builtin();
        let grid = engine.generate("solid-ring", 3, 0).unwrap();
        let palette = engine.resolve_palette("mono").unwrap();
        let table = stitch_counts_csv(&grid, palette);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "index,hex,stitches");
        assert_eq!(lines[1], "0,#FFFFFF,1");
        assert_eq!(lines[2], "1,#000000,8");
        assert_eq!(lines[7], "6,#BFBFBF,0");

        let total: usize = lines[1..]
            .iter()
            .filter_map(|line| line.rsplit(',').next())
            .map(|count| count.parse::<usize>().unwrap())
            .sum();
        assert_eq!(total, 9);
    }

    // Tests the bundle description lists the request, files and reading notes
    #[test]
    fn test_readme_txt() {
        let request = PatternRequest::new("knotwork", "mono").with_seed(3).with_size(7);
        let pattern = builtin().pattern(&request).unwrap();
        let readme = readme_txt(&pattern);

        assert!(readme.starts_with("Kaleidostitch bundle\n"));
        assert!(readme.contains("design: knotwork\npalette: mono\nseed: 3\n"));
        assert!(readme.contains("- pattern_indices.csv: 7x7 color indices (0..6)"));
        for file in ["chart.png", "preview.png", "palette.csv", "stitch_counts.csv"] {
            assert!(readme.contains(file), "{file} not described");
        }
        assert!(readme.ends_with("- the design is D8 (8-way) symmetric\n"));
    }
}
