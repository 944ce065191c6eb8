mod components;
mod fraction;
