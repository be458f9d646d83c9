pub mod membership;
pub mod projet;
pub mod seed;
pub mod tache;
pub mod utilisateur;
