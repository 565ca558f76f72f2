use super::*;

#[test]
fn rasterizes_at_intrinsic_size() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="4">
  <rect width="8" height="4" fill="#ff0000"/>
</svg>"##;
    let raster = rasterize_svg(svg).unwrap();
    assert_eq!((raster.width, raster.height), (8, 4));
    assert_eq!(raster.rgba8.len(), 8 * 4 * 4);
    assert_eq!(&raster.rgba8[0..4], &[255, 0, 0, 255]);
}

#[test]
fn translucent_fill_is_demultiplied() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="2" height="2">
  <rect width="2" height="2" fill="#ffffff" fill-opacity="0.5"/>
</svg>"##;
    let raster = rasterize_svg(svg).unwrap();
    let px = &raster.rgba8[0..4];
    assert!((127..=128).contains(&px[3]));
    assert!(px[0] >= 250, "expected near-white straight color, got {px:?}");
}

#[test]
fn rejects_malformed_svg() {
    assert!(rasterize_svg("<svg").is_err());
}

#[test]
fn demultiply_leaves_opaque_and_clear_pixels() {
    let mut px = vec![10, 20, 30, 255, 0, 0, 0, 0, 64, 32, 0, 128];
    demultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..8], &[10, 20, 30, 255, 0, 0, 0, 0]);
    assert_eq!(&px[8..12], &[128, 64, 0, 128]);
}

#[test]
fn write_png_roundtrips_dimensions() {
    let raster = Raster {
        width: 3,
        height: 2,
        rgba8: vec![200; 3 * 2 * 4],
    };
    let path = std::path::PathBuf::from("target")
        .join("unit_render_raster")
        .join("out.png");
    write_png(&path, &raster).unwrap();
    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (3, 2));
}
