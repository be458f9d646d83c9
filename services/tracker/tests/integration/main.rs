mod helpers;
mod tache_test;
mod utilisateur_test;
