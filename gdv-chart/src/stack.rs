/// One stacked value: the segment of row `index` belonging to series `key`,
/// spanning `lower..upper` along the value axis.
#[derive(Debug, Clone, PartialEq)]
pub struct StackPoint<K> {
    pub key: K,
    pub index: usize,
    pub lower: f64,
    pub upper: f64,
}

/// Every row's segment for one series.
#[derive(Debug, Clone, PartialEq)]
pub struct StackLayer<K> {
    pub key: K,
    pub points: Vec<StackPoint<K>>,
}

/// Cumulative-sum stack: series are stacked in `keys` order, the first
/// series starting at zero and each later one starting where the previous
/// ended.
pub fn stack<T, K: Clone>(rows: &[T], keys: &[K], value: impl Fn(&T, &K) -> f64) -> Vec<StackLayer<K>> {
    let mut baseline = vec![0.0; rows.len()];
    keys.iter()
        .map(|key| {
            let points = rows
                .iter()
                .enumerate()
                .map(|(index, row)| {
                    let lower = baseline[index];
                    let upper = lower + value(row, key);
                    baseline[index] = upper;
                    StackPoint {
                        key: key.clone(),
                        index,
                        lower,
                        upper,
                    }
                })
                .collect();
            StackLayer {
                key: key.clone(),
                points,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_cumulative() {
        let rows = [(3.0, 1.0), (5.0, 2.0)];
        let layers = stack(&rows, &["a", "b"], |row, key| match *key {
            "a" => row.0,
            _ => row.1,
        });

        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].key, "a");
        assert_eq!((layers[0].points[1].lower, layers[0].points[1].upper), (0.0, 5.0));
        assert_eq!((layers[1].points[0].lower, layers[1].points[0].upper), (3.0, 4.0));
        assert_eq!((layers[1].points[1].lower, layers[1].points[1].upper), (5.0, 7.0));
        assert!(layers[1].points.iter().all(|p| p.key == "b"));
    }
}
