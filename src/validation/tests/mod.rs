mod bounds;
mod policy;
