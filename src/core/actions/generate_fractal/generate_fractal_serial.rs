use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::PixelPoint;

/// Reference single-threaded pass over the raster, row-major.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let raster = algorithm.raster_size();

    (0..raster.height)
        .flat_map(|y| (0..raster.width).map(move |x| PixelPoint { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
