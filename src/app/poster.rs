use std::error::Error;
use std::sync::mpsc;

pub enum PosterMessage {
    Ready {
        imdb_id: String,
        image: Box<image::DynamicImage>,
    },
    Failed {
        imdb_id: String,
    },
}

/// Downloads and decodes a poster on a worker thread. The rendering protocol
/// is built on the UI thread because it depends on the terminal's picker.
pub fn download_poster_threaded(url: String, imdb_id: String, sender: mpsc::Sender<PosterMessage>) {
    let message = match download(&url) {
        Ok(image) => PosterMessage::Ready {
            imdb_id,
            image: Box::new(image),
        },
        Err(_) => PosterMessage::Failed { imdb_id },
    };
    let _ = sender.send(message);
}

fn download(url: &str) -> Result<image::DynamicImage, Box<dyn Error>> {
    let response = reqwest::blocking::get(url)?;

    if !response.status().is_success() {
        return Err(format!("Failed to download poster: status {}", response.status()).into());
    }

    let bytes = response.bytes()?;
    let dyn_img = image::load_from_memory(&bytes)?;

    Ok(dyn_img)
}
