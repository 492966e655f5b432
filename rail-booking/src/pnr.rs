use rand::Rng;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const PNR_LENGTH: usize = 6;

/// Random 6-character base-36 booking reference, uppercase
pub fn generate_pnr<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..PNR_LENGTH)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
