use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tour_exercises::cli::args::ParameterFilePath;
use tour_exercises::cli::commands::run_image;

fn compute_file_hash(file_path: &Path) -> Result<String, io::Error> {
    let mut file = File::open(file_path)?;
    let mut hasher = Sha256::new();
    let mut buffer = Vec::new();

    file.read_to_end(&mut buffer)?;

    hasher.update(&buffer);

    let result = hasher.finalize();
    Ok(format!("{:x}", result))
}

fn scratch_directory(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tour-{}-{}", name, std::process::id()))
}

fn render(params_path: &str, output_root: &Path) -> PathBuf {
    let args = ParameterFilePath {
        params_path: params_path.to_owned(),
        date_time_out: false,
    };
    run_image(&args, output_root).expect("render should succeed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_render_writes_png() {
        let root = scratch_directory("xor-render");
        let path = render("demos/params/xor_default.json", &root);
        assert_eq!(path, root.join("image/xor_default/xor_default.png"));

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (256, 256));
        assert_eq!(*decoded.get_pixel(5, 3), image::Rgba([6, 6, 255, 255]));
        assert_eq!(*decoded.get_pixel(255, 0), image::Rgba([255, 255, 255, 255]));

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_render_is_deterministic() {
        let first_root = scratch_directory("determinism-a");
        let second_root = scratch_directory("determinism-b");
        let first = render("demos/params/product_tiny.json", &first_root);
        let second = render("demos/params/product_tiny.json", &second_root);

        assert_eq!(
            compute_file_hash(&first).unwrap(),
            compute_file_hash(&second).unwrap()
        );

        std::fs::remove_dir_all(&first_root).unwrap();
        std::fs::remove_dir_all(&second_root).unwrap();
    }

    #[test]
    fn test_missing_parameter_file() {
        let args = ParameterFilePath {
            params_path: "demos/params/does_not_exist.json".to_owned(),
            date_time_out: false,
        };
        assert!(run_image(&args, &scratch_directory("missing")).is_err());
    }
}
