pub mod distribution_props;
