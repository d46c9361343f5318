use std::fmt::Display;

pub trait Filter {
    /// Adds `member`. Returns true if every addressed bit was already set.
    fn set<T: Display + ?Sized>(&mut self, member: &T) -> bool;

    /// Returns false only if `member` was never set.
    fn member<T: Display + ?Sized>(&self, member: &T) -> bool;

    /// number of addressable bits
    fn get_size(&self) -> usize;

    /// number of hash functions
    fn hash_count(&self) -> u64;

    /// p = (1 - (1 - 1/m)^(nk))^k where m is the number of bits
    /// and n the number of inserted members
    fn false_positive_probability(&self, inserted: u64) -> f64 {
        let k = self.hash_count() as f64;
        let unset = 1.0 - 1.0 / self.get_size() as f64;
        let set = 1.0 - unset.powf(inserted as f64 * k);
        set.powf(k)
    }

    /// Expected number of false positives among `inserted` members.
    /// Only meaningful while the probability stays low.
    fn false_positive_count(&self, inserted: u64) -> u64 {
        (self.false_positive_probability(inserted) * inserted as f64) as u64
    }
}
